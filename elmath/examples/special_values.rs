// elmath - elmath
// Module: Special Values Example
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Walk through the special-value behaviour and the error side channel.

use elmath::{
    acos_checked, classify, cos, exp, log_checked, pow, pow_checked, sin, sqrt_checked,
    MathResult, Outcome,
};

fn main() {
    println!("elmath special values");
    println!("=====================\n");

    demo_classification();
    demo_error_side_channel();
    demo_power_table();

    if let Err(e) = demo_result_conversion() {
        println!("first failure propagated with `?`: {e}");
    }
}

fn demo_classification() {
    println!("Classification:");
    println!("---------------");
    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0, 1.5] {
        println!("{x:>6} -> {:?}", classify(x));
    }
    println!();
}

fn report(name: &str, outcome: Outcome) {
    match outcome.error() {
        Some(error) => println!("{name:<16} = {:<10} {error} (errno {})", outcome.value(), error.errno()),
        None => println!("{name:<16} = {}", outcome.value()),
    }
}

fn demo_error_side_channel() {
    println!("Error side channel:");
    println!("-------------------");
    report("sqrt(-4)", sqrt_checked(-4.0));
    report("log(0)", log_checked(0.0));
    report("log(-1)", log_checked(-1.0));
    report("acos(2)", acos_checked(2.0));
    report("pow(-0, -3)", pow_checked(-0.0, -3.0));
    report("pow(-8, 1/3)", pow_checked(-8.0, 1.0 / 3.0));
    report("log(NaN)", log_checked(f64::NAN));
    println!();
}

fn demo_power_table() {
    println!("Power table rows:");
    println!("-----------------");
    let rows = [
        (f64::NAN, 0.0),
        (1.0, f64::NAN),
        (-1.0, f64::INFINITY),
        (0.5, f64::NEG_INFINITY),
        (f64::NEG_INFINITY, 3.0),
        (f64::NEG_INFINITY, -3.0),
        (-2.0, 3.0),
        (456.789, 1.1),
    ];
    for (base, exponent) in rows {
        println!("pow({base}, {exponent}) = {}", pow(base, exponent));
    }
    println!();

    println!("exp(1)          = {}", exp(1.0));
    println!("sin(1)^2+cos(1)^2 = {}", sin(1.0) * sin(1.0) + cos(1.0) * cos(1.0));
    println!();
}

fn demo_result_conversion() -> MathResult<()> {
    let root = sqrt_checked(2.0).into_result()?;
    println!("sqrt(2) = {root}");
    let bad = log_checked(-root).into_result()?;
    println!("unreachable: {bad}");
    Ok(())
}
