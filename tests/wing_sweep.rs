#![warn(clippy::pedantic)]

use std::path::PathBuf;

use approx::assert_relative_eq;
use wingbox::{
    place_stringers, point, section_properties, sweep, CrossSection, GeometryError,
    IntegrationError, Material, SparSpec, StationError, SweepConfig, SweepError, WingBoxConfig,
    WingDeflection,
};

#[derive(Debug, Clone, Copy)]
struct RectangleProperties {
    width: f64,
    height: f64,
    thickness: f64,
}

impl Default for RectangleProperties {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 0.15,
            thickness: 0.002,
        }
    }
}

impl RectangleProperties {
    fn section(&self) -> CrossSection {
        let half = 0.5 * self.height;
        CrossSection::new([
            point(0.1, half),
            point(0.1, -half),
            point(0.1 + self.width, -half),
            point(0.1 + self.width, half),
        ])
        .expect("rectangle is a valid wing box")
    }

    fn spars(&self) -> SparSpec {
        SparSpec::new(self.height, self.height)
    }
}

fn uniform_wing(chord: f64, n_stations: usize) -> SweepConfig {
    SweepConfig {
        unit_shape: CrossSection::new([
            point(0.2, 0.06),
            point(0.2, -0.06),
            point(0.65, -0.06),
            point(0.65, 0.06),
        ])
        .expect("valid unit section"),
        span_min: 0.0,
        span_max: 15.0,
        n_stations,
        root_chord: chord,
        tip_chord: chord,
        spars: SparSpec::new(0.12 * chord, 0.12 * chord),
        thickness: 0.003,
        stringer_count: 12,
        stringer_coverage: 0.9,
        stringer_area: 2.0e-4,
    }
}

/// Unique path in the system temporary directory.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wingbox-{}-{name}", std::process::id()))
}

#[test]
fn rectangle_matches_thin_walled_closed_form() {
    let rectangle = RectangleProperties::default();
    let section = rectangle.section();
    let empty = place_stringers(&section, 0, 1.0).expect("valid layout");
    let properties = section_properties(
        &section,
        &rectangle.spars(),
        0.0,
        &empty,
        rectangle.thickness,
        section.width(),
    )
    .expect("valid section");

    let RectangleProperties {
        width: w,
        height: h,
        thickness: t,
    } = rectangle;
    assert_relative_eq!(
        properties.i_xx,
        t * h.powi(3) / 6.0 + t * w * h.powi(2) / 2.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        properties.i_yy,
        t * w.powi(3) / 6.0 + t * h * w.powi(2) / 2.0,
        max_relative = 1e-12
    );
    assert_eq!(properties.j, properties.i_xx + properties.i_yy);
}

#[test]
fn stringers_lie_on_their_skins_and_stiffen_the_section() {
    let rectangle = RectangleProperties::default();
    let section = rectangle.section();
    let stringers = place_stringers(&section, 9, 0.95).expect("valid layout");
    assert_eq!(stringers.len(), 9);
    assert!(stringers.top().iter().all(|p| (p.y - 0.075).abs() < 1e-12));
    assert!(stringers.bottom().iter().all(|p| (p.y + 0.075).abs() < 1e-12));

    let mut previous = None;
    for area in [0.0, 1.0e-4, 2.0e-4, 4.0e-4] {
        let properties = section_properties(
            &section,
            &rectangle.spars(),
            area,
            &stringers,
            rectangle.thickness,
            section.width(),
        )
        .expect("valid section");
        if let Some((i_xx, i_yy)) = previous {
            assert!(properties.i_xx >= i_xx);
            assert!(properties.i_yy >= i_yy);
        }
        previous = Some((properties.i_xx, properties.i_yy));
    }
}

#[test]
fn reference_wing_sweep() {
    let config = WingBoxConfig::default();
    let profile = sweep(&config.to_sweep_config().expect("built-in section")).expect("sweep");

    let positions = profile.span_positions().to_vec();
    assert_eq!(positions.len(), 100);
    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[99], 27.47721);
    assert!(positions.windows(2).all(|pair| pair[1] > pair[0]));

    assert_eq!(profile.root().chord, 5.24140);
    assert_eq!(profile.tip().chord, 1.57714);
    for station in profile.stations() {
        assert_relative_eq!(station.width, 0.4 * station.chord, max_relative = 1e-12);
        assert_eq!(station.stringers.len(), 20);
    }
}

#[test]
fn uniform_wing_follows_beam_theory() {
    let profile = sweep(&uniform_wing(2.0, 16)).expect("sweep");
    let material = Material::default();
    let (moment, torque) = (8.0e4, 3.0e4);
    let wing = WingDeflection::new(&profile, material, |_: f64| moment, |_: f64| torque);

    let ei = material.elastic_modulus_pa() * profile.root().properties.i_xx;
    let gj = material.shear_modulus_pa() * profile.root().properties.j;
    let tip = wing.tip_response().expect("tip response");
    assert_relative_eq!(tip.slope, -moment * 15.0 / ei, max_relative = 1e-9);
    assert_relative_eq!(
        tip.deflection,
        -moment * 15.0_f64.powi(2) / (2.0 * ei),
        max_relative = 1e-9
    );
    assert_relative_eq!(tip.twist_angle, torque * 15.0 / gj, max_relative = 1e-9);

    assert_eq!(wing.deflection(0.0), Ok(0.0));
    assert_eq!(wing.twist_angle(0.0), Ok(0.0));
    assert!(matches!(
        wing.deflection(15.5),
        Err(IntegrationError::OutOfSpan { .. })
    ));
}

#[test]
fn collapsed_station_aborts_the_sweep() {
    let config = SweepConfig {
        thickness: -0.001,
        ..uniform_wing(2.0, 4)
    };
    match sweep(&config) {
        Err(SweepError::Station {
            span_position,
            source: StationError::Geometry(GeometryError::NonPositiveThickness(_)),
        }) => assert_eq!(span_position, 0.0),
        other => panic!("unexpected sweep result: {other:?}"),
    }

    let collapsed = CrossSection::new([
        point(0.3, 0.06),
        point(0.3, -0.06),
        point(0.3, -0.05),
        point(0.3, 0.05),
    ]);
    assert!(matches!(collapsed, Err(GeometryError::ZeroWidth { .. })));
}

#[test]
fn configuration_file_with_airfoil() {
    let airfoil = scratch("naca0012.dat");
    let mut outline = String::from("NACA 0012\n");
    let thickness = |x: f64| {
        0.6 * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
    };
    let stations: Vec<f64> = (0..=40).map(|i| 1.0 - f64::from(i) / 40.0).collect();
    for &x in &stations {
        outline.push_str(&format!("{x:.5} {:.6}\n", thickness(x)));
    }
    for &x in stations.iter().rev().skip(1) {
        outline.push_str(&format!("{x:.5} {:.6}\n", -thickness(x)));
    }
    std::fs::write(&airfoil, outline).expect("write airfoil");

    let config_path = scratch("config.json");
    let file_name = airfoil
        .file_name()
        .and_then(|name| name.to_str())
        .expect("utf-8 file name");
    std::fs::write(
        &config_path,
        format!(
            r#"{{
                "n_stations": 12,
                "section": {{ "airfoil": {{ "path": "{file_name}", "front_spar": 0.2, "rear_spar": 0.6 }} }},
                "bending_moment": {{ "tabulated": [[0.0, 5.0e5], [27.47721, 0.0]] }},
                "limits": {{ "max_tip_twist_deg": 5.0 }}
            }}"#
        ),
    )
    .expect("write config");

    let config = WingBoxConfig::from_json_file(&config_path).expect("valid configuration");
    let sweep_config = config.to_sweep_config().expect("airfoil fits");
    let unit = sweep_config.unit_shape;
    assert_relative_eq!(unit.width(), 0.4, epsilon = 1e-12);
    assert_relative_eq!(unit.centroid().expect("area").y, 0.0, epsilon = 1e-9);

    let profile = sweep(&sweep_config).expect("sweep");
    assert_eq!(profile.stations().len(), 12);
    let tip = WingDeflection::new(
        &profile,
        config.material(),
        config.bending_moment.clone(),
        config.torque.clone(),
    )
    .tip_response()
    .expect("tip response");
    assert!(tip.deflection < 0.0);
    let report = config.limits.check(27.47721, tip.deflection, tip.twist_angle);
    assert_eq!(report.allowed_twist_deg, 5.0);

    std::fs::remove_file(airfoil).ok();
    std::fs::remove_file(config_path).ok();
}
