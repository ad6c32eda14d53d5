use std::env;

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    Shell(String),
    PrivilegedShell(String),
    Pull { remote: String, local: String },
    Push { local: String, remote: String },
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub adb_path: String,
    pub device_id: Option<String>,
    pub tcp: bool,
    pub json: bool,
}

impl Args {
    pub fn parse() -> Option<Self> {
        let args: Vec<String> = env::args().collect();

        let mut mode: Option<Mode> = None;
        let mut adb_path = String::from("adb");
        let mut device_id: Option<String> = None;
        let mut tcp = false;
        let mut json = false;

        for arg in args.iter().skip(1) {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!(
                    "ADB Bridge v{} (build {})",
                    env!("APP_VERSION_DISPLAY"),
                    env!("APP_BUILD_YEAR")
                );
                return None;
            } else if arg == "--list" || arg == "-l" {
                mode = Some(Mode::List);
            } else if arg == "--json" {
                json = true;
            } else if arg == "--tcp" {
                tcp = true;
            } else if let Some(val) = arg.strip_prefix("--adb=") {
                adb_path = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--device=") {
                device_id = Some(val.to_string());
            } else if let Some(val) = arg.strip_prefix("--shell=") {
                mode = Some(Mode::Shell(val.to_string()));
            } else if let Some(val) = arg.strip_prefix("--su=") {
                mode = Some(Mode::PrivilegedShell(val.to_string()));
            } else if let Some(val) = arg.strip_prefix("--pull=") {
                match split_transfer(val) {
                    Some((remote, local)) => mode = Some(Mode::Pull { remote, local }),
                    None => {
                        eprintln!("❌ Invalid transfer spec '{}', expected --pull=<remote>:<local>", val);
                        return None;
                    }
                }
            } else if let Some(val) = arg.strip_prefix("--push=") {
                match split_transfer(val) {
                    Some((local, remote)) => mode = Some(Mode::Push { local, remote }),
                    None => {
                        eprintln!("❌ Invalid transfer spec '{}', expected --push=<local>:<remote>", val);
                        return None;
                    }
                }
            } else {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            }
        }

        Some(Args {
            mode: mode.unwrap_or(Mode::List),
            adb_path,
            device_id,
            tcp,
            json,
        })
    }
}

// Transfer specs split at the first ':' so local paths may contain colons
// only on the right-hand side.
fn split_transfer(raw: &str) -> Option<(String, String)> {
    let (first, second) = raw.split_once(':')?;
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

fn print_help() {
    println!("📱 ADB Bridge");
    println!();
    println!("USAGE:");
    println!("    adb-bridge [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)            List attached devices");
    println!("    --list, -l            List attached devices");
    println!("    --json                Print the device list as JSON");
    println!("    --adb=<path>          Path to the adb executable (default: adb)");
    println!("    --device=<id>         Route commands to this device serial");
    println!("    --tcp                 Use the TCP transport (-e) for the prefix");
    println!("    --shell=<cmd>         Run a command via 'adb shell'");
    println!("    --su=<cmd>            Run a command via 'adb shell su -c'");
    println!("    --pull=<remote>:<local>  Download a file from the device");
    println!("    --push=<local>:<remote>  Upload a file to the device");
    println!("    --help, -h            Show this help message");
    println!("    --version, -v         Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    adb-bridge --list --json");
    println!("    adb-bridge --device=1d36d8f1 --shell=\"ls /sdcard\"");
    println!("    adb-bridge --device=1d36d8f1 --pull=/sdcard/dump.png:./dump.png");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_transfer_at_first_colon() {
        assert_eq!(
            split_transfer("/sdcard/a.png:./a.png"),
            Some(("/sdcard/a.png".to_string(), "./a.png".to_string()))
        );
        assert_eq!(
            split_transfer("/a:b:c"),
            Some(("/a".to_string(), "b:c".to_string()))
        );
    }

    #[test]
    fn split_transfer_rejects_missing_half() {
        assert_eq!(split_transfer("/sdcard/a.png"), None);
        assert_eq!(split_transfer(":/a.png"), None);
        assert_eq!(split_transfer("/a.png:"), None);
    }
}
