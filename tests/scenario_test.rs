use anyhow::Result;
use circle_calc::{
    circle_area, multiply, Calculator, DemoConfig, DemoEngine, OutputFormat, Scenario,
    ScenarioProvider, PI,
};

#[test]
fn test_reference_scenario_end_to_end() -> Result<()> {
    let report = DemoEngine::new(Scenario::default()).run();
    let text = report.render(OutputFormat::Text)?;

    assert_eq!(
        text,
        "The area of a circle with radius 5 is: 78.53975\nCalculator current value: 17"
    );
    Ok(())
}

#[test]
fn test_area_matches_fixed_pi_for_many_radii() {
    for radius in [0.0, 0.5, 1.0, 2.0, 5.0, 12.25, 1000.0, -7.0] {
        assert_eq!(circle_area(radius), PI * (radius * radius));
        assert_eq!(circle_area(radius), multiply(PI, radius * radius));
    }
}

#[test]
fn test_calculator_total_is_initial_plus_deltas() {
    let cases: Vec<(f64, Vec<f64>)> = vec![
        (0.0, vec![]),
        (10.0, vec![7.0]),
        (0.0, vec![3.0, -5.0]),
        (-4.0, vec![0.5, 0.25, 0.125]),
        (1e6, vec![-1e6, 42.0]),
    ];

    for (initial, deltas) in cases {
        let mut calculator = Calculator::new(initial);
        let mut expected = initial;
        for delta in &deltas {
            expected += delta;
            assert_eq!(calculator.add(*delta), expected);
        }
        assert_eq!(calculator.current_value(), expected, "initial {initial}, deltas {deltas:?}");
    }
}

#[test]
fn test_config_file_drives_engine() -> Result<()> {
    let config = DemoConfig::from_toml_str(
        r#"
[circle]
radius = 2.0

[calculator]
deltas = [3.0, -5.0]

[greeting]
name = "TypeScript User"
"#,
    )?;

    assert_eq!(config.initial_value(), 0.0);

    let report = DemoEngine::new(config).run();
    assert_eq!(report.area, 3.14159 * 4.0);
    assert_eq!(report.calculator_value, -2.0);

    let lines = report.lines();
    assert_eq!(lines[1], "Calculator current value: -2");
    assert_eq!(lines[2], "Hello, TypeScript User!");
    Ok(())
}

#[test]
fn test_scenario_from_provider_copies_every_input() -> Result<()> {
    let config = DemoConfig::from_toml_str(
        "[circle]\nradius = 9.5\n\n[calculator]\ninitial_value = 1.0\ndeltas = [2.0]\n",
    )?;

    let scenario = Scenario::from_provider(&config);
    assert_eq!(
        scenario,
        Scenario {
            radius: 9.5,
            initial_value: 1.0,
            deltas: vec![2.0],
            greeting_name: None,
        }
    );
    Ok(())
}
