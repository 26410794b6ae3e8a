use wingbox::{place_stringers, point, section_properties, CrossSection, SparSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 0.8 m wide, 0.25 m deep box with 3 mm walls
    let section = CrossSection::new([
        point(0.0, 0.125),
        point(0.0, -0.125),
        point(0.8, -0.125),
        point(0.8, 0.125),
    ])?;
    let spars = SparSpec::new(0.25, 0.25);
    let thickness = 0.003;

    // Closed form for a thin-walled rectangle
    let (w, h) = (section.width(), 0.25_f64);
    let i_xx = thickness * h.powi(3) / 6.0 + thickness * w * h.powi(2) / 2.0;
    let i_yy = thickness * w.powi(3) / 6.0 + thickness * h * w.powi(2) / 2.0;

    // Skin-only, then with 16 stringers of 2 cm^2
    for (count, area) in [(0, 0.0), (16, 2.0e-4)] {
        let stringers = place_stringers(&section, count, 0.9)?;
        let properties = section_properties(&section, &spars, area, &stringers, thickness, w)?;
        println!(
            "{count:>2} stringers: I_xx = {:.4e} m^4, I_yy = {:.4e} m^4, J = {:.4e} m^4",
            properties.i_xx, properties.i_yy, properties.j
        );
    }
    println!("closed form: I_xx = {i_xx:.4e} m^4, I_yy = {i_yy:.4e} m^4");

    Ok(())
}
