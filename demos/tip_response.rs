use wingbox::{
    sweep, DesignLimits, Material, PolynomialLoad, TabulatedLoad, WingBoxConfig, WingDeflection,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reference wing with 40 stations and a few stringers worth counting
    let config = WingBoxConfig {
        n_stations: 40,
        stringer_area: 3.0e-4,
        thickness: 0.004,
        ..WingBoxConfig::default()
    };
    let profile = sweep(&config.to_sweep_config()?)?;
    let span = config.span_max - config.span_min;

    // Bending moment falls off quadratically towards the tip, torque is tabulated
    let moment = PolynomialLoad::new(vec![2.0e6, -2.0 * 2.0e6 / span, 2.0e6 / span.powi(2)]);
    let torque = TabulatedLoad::new(vec![(0.0, 1.5e5), (0.5 * span, 6.0e4), (span, 0.0)])?;

    let wing = WingDeflection::new(&profile, Material::default(), moment, torque);
    for y in [0.25 * span, 0.5 * span, 0.75 * span] {
        println!(
            "y = {y:6.2} m: v = {:+.4} m, theta = {:+.3} deg",
            wing.deflection(y)?,
            wing.twist_angle(y)?.to_degrees()
        );
    }

    let tip = wing.tip_response()?;
    let report = DesignLimits::default().check(span, tip.deflection, tip.twist_angle);
    println!(
        "tip: v = {:+.4} m (limit {:.4} m), theta = {:+.3} deg (limit {:.1} deg), {}",
        tip.deflection,
        report.allowed_deflection,
        tip.twist_angle.to_degrees(),
        report.allowed_twist_deg,
        if report.passed() { "within limits" } else { "limits exceeded" }
    );

    Ok(())
}
