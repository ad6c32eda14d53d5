use adb_bridge::args::{Args, Mode};
use adb_bridge::bridge::{AdbWrapper, BridgeResult, Transport};

fn main() {
    env_logger::init();

    let Some(args) = Args::parse() else {
        return;
    };

    let mut wrapper = match args.device_id.as_deref() {
        Some(id) => AdbWrapper::with_device(&args.adb_path, id),
        None => AdbWrapper::new(&args.adb_path),
    };
    if args.tcp {
        wrapper.set_transport(Transport::Tcp);
    }
    if !wrapper.is_ready() {
        eprintln!("❌ No adb executable configured");
        std::process::exit(2);
    }

    let device_id = args.device_id.as_deref();
    let result = match &args.mode {
        Mode::List => list_devices(&wrapper, args.json),
        Mode::Shell(command) => wrapper.shell(command, device_id).map(print_output),
        Mode::PrivilegedShell(command) => {
            wrapper.privileged_shell(command, device_id).map(print_output)
        }
        Mode::Pull { remote, local } => wrapper.pull(remote, local, device_id).map(print_output),
        Mode::Push { local, remote } => wrapper.push(local, remote, device_id).map(print_output),
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn list_devices(wrapper: &AdbWrapper, json: bool) -> BridgeResult<()> {
    let scan = wrapper.scan_devices()?;
    if !scan.skipped.is_empty() {
        log::warn!("{} unparsable device line(s) skipped", scan.skipped.len());
    }
    if json {
        match serde_json::to_string_pretty(&scan.devices) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("❌ JSON encoding failed: {e}"),
        }
        return Ok(());
    }
    if scan.devices.is_empty() {
        println!("No devices found");
        return Ok(());
    }
    for device in &scan.devices {
        let kind = if device.is_emulated { "emulator" } else { "device" };
        println!(
            "{:<22} {:<8} model:{} product:{} usb:{}",
            device.identifier, kind, device.model, device.product, device.usb
        );
    }
    Ok(())
}

fn print_output(output: String) {
    if !output.is_empty() {
        print!("{output}");
    }
}
