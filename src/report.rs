//! Plain-text reports of a sweep and its tip response.

use std::fmt::Write;

use crate::constraints::ConstraintReport;
use crate::deflection::TipResponse;
use crate::sweep::{SpanProfile, Station};

/// Render a textual summary of the sweep, the tip response and the design-limit check.
///
/// The report lists root and tip stations first so the tip response can be read against
/// the stiffness that produced it. Background on the quantities is in
/// <https://en.wikipedia.org/wiki/Second_moment_of_area> and
/// <https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory>.
///
/// # Examples
/// ```no_run
/// # use wingbox::{report::render_summary, ConstraintReport, SpanProfile, TipResponse};
/// # fn print(profile: &SpanProfile, tip: &TipResponse, limits: &ConstraintReport) {
/// println!("{}", render_summary(profile, tip, limits));
/// # }
/// ```
#[must_use]
pub fn render_summary(
    profile: &SpanProfile,
    tip: &TipResponse,
    constraints: &ConstraintReport,
) -> String {
    let mut output = String::new();

    // Span covered by the sweep, so the station values below have a frame.
    writeln!(
        &mut output,
        "Wing-box sweep ({} stations, y = {:.3} m to {:.3} m)",
        profile.stations().len(),
        profile.root().span_position,
        profile.tip().span_position
    )
    .expect("writing to string cannot fail");

    // Stiffness falls with chord, so root and tip bound every station in between.
    write_station(&mut output, "Root", profile.root());
    write_station(&mut output, "Tip", profile.tip());

    // Slope and deflection come from integrating -M/EI twice, twist from T/GJ once.
    // See https://en.wikipedia.org/wiki/Torsion_(mechanics) for the twist relation.
    writeln!(
        &mut output,
        "Tip response: deflection = {:+.4e} m, slope = {:+.4e} rad, twist = {:+.4} deg",
        tip.deflection,
        tip.slope,
        tip.twist_angle.to_degrees()
    )
    .expect("writing to string cannot fail");

    // Limits compare magnitudes, so a downward deflection is checked like an upward one.
    writeln!(
        &mut output,
        "Deflection limit: |v| = {:.4e} m <= {:.4e} m ... {}",
        constraints.tip_deflection,
        constraints.allowed_deflection,
        verdict(constraints.deflection_ok())
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Twist limit: |theta| = {:.4} deg <= {:.4} deg ... {}",
        constraints.tip_twist_deg,
        constraints.allowed_twist_deg,
        verdict(constraints.twist_ok())
    )
    .expect("writing to string cannot fail");

    output
}

/// Render one row per station with chord, width and section properties.
#[must_use]
pub fn render_station_table(profile: &SpanProfile) -> String {
    let mut output = String::new();
    writeln!(
        &mut output,
        "{:>10} {:>9} {:>9} {:>12} {:>12} {:>12}",
        "y [m]", "c [m]", "w [m]", "I_xx [m^4]", "I_yy [m^4]", "J [m^4]"
    )
    .expect("writing to string cannot fail");
    for station in profile.stations() {
        writeln!(
            &mut output,
            "{:>10.4} {:>9.4} {:>9.4} {:>12.4e} {:>12.4e} {:>12.4e}",
            station.span_position,
            station.chord,
            station.width,
            station.properties.i_xx,
            station.properties.i_yy,
            station.properties.j
        )
        .expect("writing to string cannot fail");
    }
    output
}

/// Append one summary line for a named station.
fn write_station(output: &mut String, label: &str, station: &Station) {
    writeln!(
        output,
        "{label} (y = {:.3} m): chord = {:.4} m, width = {:.4} m, \
         I_xx = {:.4e} m^4, I_yy = {:.4e} m^4, J = {:.4e} m^4",
        station.span_position,
        station.chord,
        station.width,
        station.properties.i_xx,
        station.properties.i_yy,
        station.properties.j
    )
    .expect("writing to string cannot fail");
}

/// Pass/fail label.
fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "EXCEEDED"
    }
}
