// Tests for the enumeration and dispatch layer
// Focus: listing parse behavior, transport classification, child binding

#[cfg(test)]
mod enumeration_tests {
    use crate::bridge::{AdbWrapper, Platform, Transport};

    // ============================================================
    // LISTING PARSE TESTS
    // ============================================================

    #[test]
    fn test_parse_devices_multiple() {
        let adb_output = "List of devices attached\n1d36d8f1               device usb:1-4 product:OnePlus6 model:ONEPLUS_A6000 device:OnePlus6 transport_id:2\nemulator-5554          device product:sdk_gphone_x86 model:sdk_gphone_x86 device:generic_x86 transport_id:3\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        assert_eq!(scan.devices.len(), 2);
        assert_eq!(scan.devices[0].identifier, "1d36d8f1");
        assert_eq!(scan.devices[1].identifier, "emulator-5554");
        assert!(scan.skipped.is_empty());
    }

    #[test]
    fn test_parse_devices_single() {
        let adb_output =
            "List of devices attached\nABC123DEF              device usb:1-1 product:sdk_phone model:Pixel_5\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        assert_eq!(scan.devices.len(), 1);
        let device = &scan.devices[0];
        assert_eq!(device.identifier, "ABC123DEF");
        assert_eq!(device.platform, Platform::Android);
        assert_eq!(device.usb, "1-1");
        assert_eq!(device.product, "sdk_phone");
        assert_eq!(device.model, "Pixel_5");
    }

    #[test]
    fn test_parse_skips_blanks_and_header_keeps_order() {
        let adb_output = "\nList of devices attached\n\naaa111 device usb:1-1 product:p1 model:m1\n\nbbb222 device usb:1-2 product:p2 model:m2\n   \n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        let ids: Vec<&str> = scan.devices.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(ids, vec!["aaa111", "bbb222"]);
    }

    #[test]
    fn test_unparsable_line_is_dropped_not_fatal() {
        let adb_output =
            "List of devices attached\nABC123DEF device usb:1-1 product:p model:m\n1d36d8f1 offline\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        assert_eq!(scan.devices.len(), 1);
        assert_eq!(scan.skipped, vec!["1d36d8f1 offline".to_string()]);
    }

    #[test]
    fn test_empty_output_yields_no_devices() {
        let scan = AdbWrapper::new("adb").parse_devices("List of devices attached\n\n");
        assert!(scan.devices.is_empty());
        assert!(scan.skipped.is_empty());
    }

    // ============================================================
    // TRANSPORT CLASSIFICATION TESTS
    // ============================================================

    #[test]
    fn test_emulator_gets_tcp_child_bridge() {
        let adb_output =
            "List of devices attached\nemulator-5554 device product:sdk_gphone model:sdk_gphone\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        let device = &scan.devices[0];
        assert!(device.is_emulated);
        assert_eq!(device.bridge.transport(), Transport::Tcp);
    }

    #[test]
    fn test_physical_device_keeps_usb_default() {
        let adb_output = "List of devices attached\nABC123DEF device usb:1-1 product:p model:m\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        let device = &scan.devices[0];
        assert!(!device.is_emulated);
        assert_eq!(device.bridge.transport(), Transport::Usb);
    }

    // ============================================================
    // CHILD BRIDGE BINDING TESTS
    // ============================================================

    #[test]
    fn test_child_bridge_bound_to_parsed_identifier() {
        let adb_output = "List of devices attached\n1d36d8f1 device usb:1-4 product:OnePlus6 model:ONEPLUS_A6000\nemulator-5554 device product:sdk model:sdk\n";
        let parent = AdbWrapper::new("/opt/sdk/adb");
        let scan = parent.parse_devices(adb_output);
        for device in &scan.devices {
            assert_eq!(device.bridge.device_id(), Some(device.identifier.as_str()));
            assert_eq!(device.bridge.path(), "/opt/sdk/adb");
        }
    }

    #[test]
    fn test_child_bridge_prefix_routes_to_device() {
        let adb_output = "List of devices attached\nABC123DEF device usb:1-1 product:p model:m\n";
        let scan = AdbWrapper::new("adb").parse_devices(adb_output);
        assert_eq!(scan.devices[0].bridge.setup(None), "adb -s ABC123DEF");
    }
}
