use radiotherm_lan::TstatClient;

fn device_address() -> String {
    std::env::var("RADIOTHERM_ADDR").unwrap_or_else(|_| "thermostat".to_string())
}

/// Run with: cargo test --test integration -- --ignored
/// Requires a reachable thermostat; set RADIOTHERM_ADDR to its hostname
/// or IP (defaults to "thermostat").
#[tokio::test]
#[ignore]
async fn identity_then_state_and_target() {
    let mut client = TstatClient::builder().address(device_address()).build();

    let identity = client.identity().await.expect("identity fetch failed");
    println!("model {} firmware {}", identity.model, identity.version);
    assert!(!identity.model.is_empty());
    assert!(!identity.version.is_empty());

    let state = client.state().await.expect("state fetch failed");
    println!(
        "temp {:.1} running {} fan {:?}",
        state.current_temp,
        state.hvac_run_state.label(),
        state.fan_run_state
    );
    assert!(state.current_temp > 20.0, "implausible reading");

    let target = client.target().await.expect("target fetch failed");
    println!(
        "target {:.1} mode {} fan {}",
        target.target_temp, target.hvac_mode, target.fan_mode.label()
    );
}

#[tokio::test]
#[ignore]
async fn programs_are_readable() {
    let mut client = TstatClient::builder().address(device_address()).build();

    let heat = client.heat_program().await.expect("heat program failed");
    let cool = client.cool_program().await.expect("cool program failed");

    for (label, schedule) in [("heat", &heat), ("cool", &cool)] {
        for day in 0..7 {
            println!("{label} day {day}: {:?}", schedule.day(day).unwrap());
        }
    }
}
