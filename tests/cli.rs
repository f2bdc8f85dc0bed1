use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

fn carrier_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "carrier_name,state,location,address,full_address,lat,long").unwrap();
    writeln!(file, "Abuja Freight,FCT,Wuse,2 Aminu Kano Crescent,,9.0765,7.3986").unwrap();
    writeln!(file, "Lagos Island Haulage,Lagos,Marina,5 Broad Street,,6.4550,3.3841").unwrap();
    writeln!(file, "Port Harcourt Movers,Rivers,GRA,7 Aba Road,,4.8156,7.0498").unwrap();
    writeln!(file, "Broken Row,Lagos,Yaba,9 Herbert Macaulay Way,,,").unwrap();
    file
}

fn nearest_carriers(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nearest-carriers"))
        .args(args)
        .env_remove("CARRIER_DATA_PATH")
        .env_remove("CARRIER_DEFAULT_COUNT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_closest_carriers_as_cards() {
    let file = carrier_file();
    let data = file.path().to_str().unwrap();
    let output = nearest_carriers(&[
        "--lat", "6.5244", "--lon", "3.3792", "-d", data, "-n", "2",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lagos = text.find("Lagos Island Haulage").unwrap();
    let port_harcourt = text.find("Port Harcourt Movers").unwrap();
    assert!(lagos < port_harcourt);
    assert!(!text.contains("Abuja Freight"));
    assert!(text.contains("  State: Lagos"));
    assert!(text.contains("  Address: 5 Broad Street"));
    assert!(text.contains("  Distance: 7.74 km"));
    assert!(text.contains("  Distance: 448.39 km"));
    assert!(text.contains("warning: 1 carriers had unusable location data"));
}

#[test]
fn invalid_latitude_is_reported_before_loading() {
    let output = nearest_carriers(&[
        "--lat",
        "95",
        "--lon",
        "3",
        "-d",
        "/no/such/carriers.csv",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("latitude is outside of [-90, 90]"), "{}", err);
    assert!(!err.contains("failed to read carrier data"));
}

#[test]
fn negative_count_is_invalid_input() {
    let file = carrier_file();
    let data = file.path().to_str().unwrap();
    let output = nearest_carriers(&[
        "--lat", "6.5244", "--lon", "3.3792", "-d", data, "-n", "-2",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must be positive, got -2"));
}

#[test]
fn missing_longitude_is_invalid_input() {
    let file = carrier_file();
    let data = file.path().to_str().unwrap();
    let output = nearest_carriers(&["--lat", "6.5244", "-d", data]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing a latitude or longitude"));
}

#[test]
fn missing_data_file_is_a_load_failure() {
    let output = nearest_carriers(&[
        "--lat",
        "6.5244",
        "--lon",
        "3.3792",
        "-d",
        "/no/such/carriers.csv",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("failed to read carrier data"));
    assert_eq!(err.matches("failed to read carrier data").count(), 1);
}

#[test]
fn geojson_format() {
    let file = carrier_file();
    let data = file.path().to_str().unwrap();
    let output = nearest_carriers(&[
        "--lat", "6.5244", "--lon", "3.3792", "-d", data, "-f", "geojson",
    ]);

    assert!(output.status.success());
    let collection: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let features = collection["features"].as_array().unwrap();
    // The user plus the default three carriers.
    assert_eq!(features.len(), 4);
    assert_eq!(features[1]["properties"]["name"], "Lagos Island Haulage");
}

#[test]
fn documents_format_needs_no_location() {
    let file = carrier_file();
    let data = file.path().to_str().unwrap();
    let output = nearest_carriers(&["-d", data, "--format", "documents"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["id"], "0");
    assert_eq!(lines[0]["metadata"]["carrier_name"], "Abuja Freight");
    assert_eq!(lines[0]["metadata"]["lat"], 9.0765);
    assert_eq!(lines[3]["metadata"]["long"], serde_json::Value::Null);
}
