//! Parameterized Triggers
//!
//! This example shows how a state machine engine declares trigger
//! parameters and checks fired arguments before running any action.
//!
//! Key concepts:
//! - Declaring signatures explicitly or from Rust tuple types
//! - Fail-fast validation on the dispatch path
//! - Accumulated diagnostics for error reports
//! - Saving declared signatures as a manifest
//!
//! Run with: cargo run --example parameterized_triggers

use trigger_args::args;
use trigger_args::binder::ArgumentBinder;
use trigger_args::core::{ParamKind, ParameterSignature};
use trigger_args::manifest::SignatureManifest;
use trigger_args::registry::TriggerRegistry;
use trigger_args::trigger_enum;

trigger_enum! {
    enum Thermostat {
        SetTarget,
        SetMode,
        PowerOff,
    }
}

fn main() {
    println!("=== Parameterized Triggers Example ===\n");

    let mut registry = TriggerRegistry::new();

    // Example 1: Typed declaration
    println!("Example 1: Typed Trigger");
    let set_target = registry
        .configure_typed::<(f64, Option<String>)>(Thermostat::SetTarget)
        .expect("SetTarget is declared once");
    println!("  SetTarget parameters: {}", set_target.signature());

    match set_target.bind(&args![21.5, "living room"]) {
        Ok((celsius, zone)) => println!("  Target {celsius} in {zone:?}\n"),
        Err(e) => println!("  Rejected: {e}\n"),
    }

    // Example 2: Explicit declaration and fail-fast validation
    println!("Example 2: Validation Failures");
    registry
        .configure(
            Thermostat::SetMode,
            ParameterSignature::new([ParamKind::Text, ParamKind::Bool]),
        )
        .expect("SetMode is declared once");

    for bundle in [args!["eco", true], args!["eco"], args!["eco", true, 1], args![3, true]] {
        match registry.validate(&Thermostat::SetMode, &bundle) {
            Ok(()) => println!("  {bundle:?} -> ok"),
            Err(e) => println!("  {bundle:?} -> {e}"),
        }
    }
    let undeclared = registry.validate(&Thermostat::PowerOff, &args!["now"]);
    println!("  PowerOff has no declared parameters: {undeclared:?}\n");

    // Example 3: Accumulated diagnostics
    println!("Example 3: Diagnostics");
    let binder = ArgumentBinder::new();
    if let Some(signature) = registry.signature(&Thermostat::SetMode) {
        let report = binder.diagnose(&args![3, "yes", 1], signature);
        println!("  Bundle passes all checks: {}\n", report.is_success());
    }

    // Example 4: Manifest
    println!("Example 4: Signature Manifest");
    let manifest = SignatureManifest::from_registry(&registry);
    match manifest.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => println!("  Could not serialize manifest: {e}"),
    }

    println!("\n=== Example Complete ===");
}
