use std::env;

use radiotherm_lan::{HvacMode, TstatClient};

#[tokio::main]
async fn main() -> radiotherm_lan::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let address = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "thermostat".to_string());

    let mut client = TstatClient::builder().address(address.as_str()).build();

    let identity = client.identity().await?;
    println!("{} ({} firmware {})", address, identity.model, identity.version);

    let state = client.state().await?;
    print!(
        "currently {:.1}\u{00b0}F, {} running, fan {:?}",
        state.current_temp,
        state.hvac_run_state.label(),
        state.fan_run_state,
    );
    if let Some(clock) = state.clock {
        print!(
            " | device clock {} {:02}:{:02}",
            clock.day_name().unwrap_or("?"),
            clock.hour,
            clock.minute
        );
    }
    println!();

    let target = client.target().await?;
    let mode = HvacMode::from_code(target.hvac_mode)
        .map(|m| m.label())
        .unwrap_or("?");
    println!(
        "set to {:.1}\u{00b0}F, mode {mode}, fan {} | program mode {} override {} hold {}",
        target.target_temp,
        target.fan_mode.label(),
        target.program.mode,
        target.program.override_flag,
        target.program.hold,
    );

    let heat = client.heat_program().await?;
    for day in 0..7 {
        let periods = heat.day(day).unwrap_or(&[]);
        if periods.is_empty() {
            continue;
        }
        let rendered: Vec<String> = periods
            .iter()
            .map(|p| {
                format!(
                    "{:02}:{:02} -> {:.0}\u{00b0}F",
                    p.start_minute / 60,
                    p.start_minute % 60,
                    p.setpoint
                )
            })
            .collect();
        println!("heat program day {day}: {}", rendered.join(", "));
    }

    Ok(())
}
