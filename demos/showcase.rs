//! Prints a tour of the kernel's operations.
//!
//! Usage:
//! ```text
//! cargo run --example showcase
//! RUST_LOG=geoprim=debug cargo run --example showcase   # show fallback diagnostics
//! ```

use geoprim::math::radians_to_degrees;
use geoprim::query::{
    angle_between, are_collinear, are_coplanar, distance, intersection, intersection_of_planes,
    tetrahedron_volume, triangle_area,
};
use geoprim::{cross_product, dot_product, Line, Plane, Point, Polygon, Result, EPSILON};

fn main() -> Result<()> {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("geoprim showcase");
    points()?;
    lines()?;
    planes()?;
    polygons()?;
    utilities()?;
    section("done");
    Ok(())
}

fn section(title: &str) {
    println!("\n{}", "-".repeat(50));
    println!("  {title}");
    println!("{}", "-".repeat(50));
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn points() -> Result<()> {
    section("points");
    let p1 = Point::new(1.0, 2.0, 3.0);
    let p2 = Point::new(4.0, 5.0, 6.0);
    println!("p1 = {p1:.2}");
    println!("p2 = {p2:.2}");
    println!("p1 + p2 = {:.2}", p1 + p2);
    println!("p2 - p1 = {:.2}", p2 - p1);
    println!("p1 * 2.5 = {:.2}", p1 * 2.5);
    println!("p2 / 2 = {:.2}", p2.checked_div(2.0)?);
    println!("|p1| = {:.2}", p1.magnitude());
    println!("p1 normalized = {:.2}", p1.normalized()?);
    println!("distance p1 -> p2 = {:.2}", p1.distance_to(&p2));
    println!("p1 . p2 = {:.2}", dot_product(&p1, &p2));
    println!("p1 x p2 = {:.2}", cross_product(&p1, &p2));
    Ok(())
}

fn lines() -> Result<()> {
    section("lines");
    let line1 = Line::new(Point::new(0.0, 0.0, 0.0), Point::new(3.0, 4.0, 0.0));
    let line2 = Line::new(Point::new(1.0, 1.0, 0.0), Point::new(4.0, 2.0, 0.0));
    println!("line1 = {line1:.2}");
    println!("line2 = {line2:.2}");
    println!("length = {:.2}", line1.length());
    println!("direction = {:.2}", line1.direction()?);
    println!("midpoint = {:.2}", line1.midpoint());

    let probe = Point::new(1.0, 2.0, 0.0);
    println!("probe = {probe:.2}");
    println!("distance to line1 = {:.2}", line1.distance_to(&probe));
    println!("projection = {:.2}", line1.project(&probe));
    println!("reflection = {:.2}", line1.reflect(&probe));

    let angle = line1.angle_with(&line2)?;
    println!("line1 intersects line2: {}", yes_no(line1.intersects(&line2)));
    println!("angle = {angle:.2} rad ({:.2} deg)", radians_to_degrees(angle));

    println!("quadratic bezier:");
    let (p0, control, p2) = (
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.5, 2.0, 0.0),
        Point::new(3.0, 0.0, 0.0),
    );
    for i in 0..=5 {
        let t = f64::from(i) / 5.0;
        println!("  t = {t:.2}: {:.2}", Line::bezier_quadratic(&p0, &control, &p2, t));
    }
    Ok(())
}

fn planes() -> Result<()> {
    section("planes");
    let plane1 = Plane::from_points(
        &Point::new(0.0, 0.0, 0.0),
        &Point::new(1.0, 0.0, 0.0),
        &Point::new(0.0, 1.0, 0.0),
    )?;
    let plane2 = Plane::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, 5.0))?;
    println!("plane1 = {plane1:.2}");
    println!("plane2 = {plane2:.2}");
    println!("plane1 d = {:.2}", plane1.d());

    let probe = Point::new(1.0, 1.0, 2.0);
    println!("probe = {probe:.2}");
    println!("signed distance = {:.2}", plane1.signed_distance_to(&probe));
    println!("distance = {:.2}", plane1.distance_to(&probe));
    println!("projection = {:.2}", plane1.project(&probe));
    println!("reflection = {:.2}", plane1.reflect(&probe));

    let segment = Line::new(Point::new(1.0, 1.0, -1.0), Point::new(1.0, 1.0, 3.0));
    println!("segment = {segment:.2}");
    println!("segment intersects plane1: {}", yes_no(plane1.intersects(&segment)));
    match plane1.intersection_with(&segment) {
        Some(hit) => println!("intersection = {hit:.2}"),
        None => println!("no intersection"),
    }

    let angle = plane1.angle_with(&plane2);
    println!("angle = {angle:.2} rad ({:.2} deg)", radians_to_degrees(angle));
    println!("parallel: {}", yes_no(plane1.is_parallel_to(&plane2)));
    Ok(())
}

fn polygons() -> Result<()> {
    section("polygons");
    let mut square = Polygon::new();
    square.add_vertex(Point::new(0.0, 0.0, 0.0));
    square.add_vertex(Point::new(2.0, 0.0, 0.0));
    square.add_vertex(Point::new(2.0, 2.0, 0.0));
    square.add_vertex(Point::new(0.0, 2.0, 0.0));
    println!("square = {square:.2}");
    println!("area = {:.2}", square.area());
    println!("perimeter = {:.2}", square.perimeter());
    println!("centroid = {:.2}", square.centroid()?);
    println!("convex: {}", yes_no(square.is_convex()));

    let probe = Point::new(1.0, 1.0, 0.0);
    println!("probe = {probe:.2}");
    println!("probe inside: {}", yes_no(square.contains_point(&probe, true)));
    println!("distance = {:.2}", square.distance_to(&probe));

    let cloud = Polygon::from_vertices(vec![
        Point::new(3.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(2.0, 2.0, 0.0),
        Point::new(2.0, 3.0, 0.0),
        Point::new(3.0, 3.0, 0.0),
        Point::new(4.0, 2.0, 0.0),
    ]);
    println!("cloud = {cloud:.2}");
    println!("hull = {:.2}", cloud.convex_hull());

    let bb = square.bounding_box();
    println!("bounding box: min = {:.2}, max = {:.2}", bb.min, bb.max);
    Ok(())
}

fn utilities() -> Result<()> {
    section("utilities");
    let p1 = Point::new(1.0, 2.0, 3.0);
    let p2 = Point::new(4.0, 5.0, 6.0);
    let p3 = Point::new(7.0, 8.0, 9.0);
    let p4 = Point::new(1.0, 0.0, 0.0);
    println!("distance p1 -> p2 = {:.2}", distance(&p1, &p2));
    println!("p1, p2, p3 collinear: {}", yes_no(are_collinear(&p1, &p2, &p3, EPSILON)));
    println!(
        "p1, p2, p3, p4 coplanar: {}",
        yes_no(are_coplanar(&p1, &p2, &p3, &p4, EPSILON))
    );
    println!("triangle area = {:.2}", triangle_area(&p1, &p2, &p3));
    println!("tetrahedron volume = {:.2}", tetrahedron_volume(&p1, &p2, &p3, &p4));

    let v1 = Point::new(1.0, 0.0, 0.0);
    let v2 = Point::new(0.0, 1.0, 0.0);
    let angle = angle_between(&v1, &v2);
    println!("angle v1, v2 = {angle:.2} rad ({:.2} deg)", radians_to_degrees(angle));

    let origin = Point::origin();
    let plane1 = Plane::new(Point::new(0.0, 0.0, 1.0), origin)?;
    let plane2 = Plane::new(Point::new(0.0, 1.0, 0.0), origin)?;
    let plane3 = Plane::new(Point::new(1.0, 0.0, 0.0), origin)?;
    match intersection(&plane1, &plane2) {
        Some(line) => println!("plane1 / plane2 line = {line:.2}"),
        None => println!("plane1 and plane2 are parallel"),
    }
    match intersection_of_planes(&plane1, &plane2, &plane3) {
        Some(point) => println!("three-plane point = {point:.2}"),
        None => println!("no unique three-plane point"),
    }
    Ok(())
}
