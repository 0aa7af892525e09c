//! Handshake trace example.
//!
//! Replays the bench sequence on a 25 MHz clock: 10 idle ticks, raise enable
//! with 1/32 of a revolution, wait for done, drop enable, settle for 1000
//! ticks, twice. Prints the edges seen on STEP and DONE.
//!
//! Uses plain structs for pins and delay so it runs without hardware.

use angle_stepgen::{
    parse_config, RelativeAngle, SignalInputs, SignalOutputs, StepGeneratorBuilder,
};

/// Delay that only counts simulated time.
struct SimDelay {
    now_ns: u64,
}

impl embedded_hal::delay::DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
    }
}

/// Output pin that ignores writes.
struct NullPin;

impl embedded_hal::digital::ErrorType for NullPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for NullPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

const CONFIG: &str = r#"
[generator]
steps_per_revolution = 3200
pulse_interval_ticks = 8

[clock]
period_ns = 40
"#;

fn main() {
    println!("=== Angle to Step Handshake Trace ===\n");

    let config = parse_config(CONFIG).expect("Failed to parse config");
    let mut generator = StepGeneratorBuilder::new()
        .from_config(&config)
        .step_pin(NullPin)
        .dir_pin(NullPin)
        .done_pin(NullPin)
        .delay(SimDelay { now_ns: 0 })
        .build()
        .expect("Failed to build generator");

    let angle = RelativeAngle::from_raw(0b0000_0100_0000_0000_0000_0000_0000_0000);
    let period = u64::from(config.clock.period_ns);
    let mut prev = SignalOutputs::default();

    for cycle in 0..2 {
        println!("cycle {}", cycle);
        generator.idle_ticks(10).expect("pin error");

        let mut pulses = 0;
        let requested = SignalInputs::requested(angle);
        loop {
            let out = generator.tick(&requested).expect("pin error");
            if out.step && !prev.step {
                pulses += 1;
            }
            prev = out;
            if out.done {
                break;
            }
        }
        println!(
            "  done rose at {} ns after {} pulses ({:?})",
            generator.elapsed().value() * period,
            pulses,
            prev.direction
        );

        let released = SignalInputs::released(angle);
        while generator.tick(&released).expect("pin error").done {}
        println!("  done fell at {} ns", generator.elapsed().value() * period);

        generator.idle_ticks(1000).expect("pin error");
    }

    println!("\nposition: {} steps", generator.position());
    println!("state: {}", generator.state());
}
