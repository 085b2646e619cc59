use distances::{DisplayStyle, UnitValue, au, feet, meters, miles};

fn main() {
    println!("=== Readable Distances ===\n");

    let s = "-".repeat(50);

    println!("Metric auto-scaling");
    println!("{}", s);
    for d in [
        meters(0.005),
        meters(1.0),
        meters(1500.0),
        meters(3.0e10),
        meters(1.0e25),
    ] {
        println!("{:>12} m  ->  {}", d.meters(), d);
    }

    println!("\nImperial thresholds");
    println!("{}", s);
    for d in [feet(0.5), feet(2000.0), miles(2.5)] {
        println!("{:>12.2} ft ->  {}", d.feet(), d);
    }

    println!("\nMode changes share the magnitude");
    println!("{}", s);
    let marathon = meters(42195.0);
    println!("metric:       {}", marathon);
    println!("imperial:     {}", marathon.to_imperial());
    println!("astronomical: {}", marathon.to_astronomical());
    println!("plain:        {}", marathon.with_style(DisplayStyle::Plain));

    println!("\nUnit-tagged values");
    println!("{}", s);
    for raw in [UnitValue::new(26.2, "miles"), UnitValue::new(1.0, "AU")] {
        match raw.to_distance() {
            Ok(d) => println!("{} {:<6} ->  {}", raw.value, raw.unit, d),
            Err(e) => println!("{} {:<6} ->  {}", raw.value, raw.unit, e),
        }
    }

    println!("\n1 AU is {}", au(1.0).to_metric());
}
