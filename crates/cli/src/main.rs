//! Inspection CLI over the geometry core.
//!
//! Input files are JSON: either a single contour `[[x, y], ...]` or a
//! composite polygon `[[[x, y], ...], ...]`. Outputs are JSON on stdout.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::contains::Containment;
use planar::contour::Contour;
use planar::polygon::Polygon;
use planar::Pt2;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon geometry inspector")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print area, perimeter, bounds, and orientation of the input geometry
    Measure {
        #[arg(long)]
        input: String,
    },
    /// Classify a query point against the input geometry
    Contains {
        #[arg(long)]
        input: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Arc-length interpolation along a single contour
    Interpolate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        t: f64,
    },
}

/// Accepts a bare contour or a list of contours.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Contour(Vec<[f64; 2]>),
    Polygon(Vec<Vec<[f64; 2]>>),
}

enum Geometry {
    Contour(Contour),
    Polygon(Polygon),
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Measure { input } => measure(&input),
        Action::Contains { input, x, y } => contains(&input, x, y),
        Action::Interpolate { input, t } => interpolate(&input, t),
    }
}

fn load_geometry(path: &str) -> Result<Geometry> {
    let raw = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading {path}"))?;
    let input: Input =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path} as geometry JSON"))?;
    Ok(match input {
        Input::Contour(pts) => Geometry::Contour(to_contour(pts)),
        Input::Polygon(chains) => {
            Geometry::Polygon(Polygon::from_contours(chains.into_iter().map(to_contour).collect()))
        }
    })
}

fn to_contour(pts: Vec<[f64; 2]>) -> Contour {
    Contour::from_points(pts.into_iter().map(|[x, y]| Pt2::new(x, y)).collect())
}

fn measure(input: &str) -> Result<()> {
    tracing::info!(input, "measure");
    let value = match load_geometry(input)? {
        Geometry::Contour(c) => measure_contour(&c)?,
        Geometry::Polygon(p) => measure_polygon(&p)?,
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn measure_contour(c: &Contour) -> Result<serde_json::Value> {
    let b = c.bounds()?;
    Ok(serde_json::json!({
        "points": c.len(),
        "signed_area": c.signed_area()?,
        "area": c.area()?,
        "perimeter": c.perimeter()?,
        "orientation": format!("{:?}", c.orientation()?),
        "bounds": { "x": b.x, "y": b.y, "width": b.width, "height": b.height },
    }))
}

fn measure_polygon(p: &Polygon) -> Result<serde_json::Value> {
    let b = p.bounds()?;
    Ok(serde_json::json!({
        "contours": p.len(),
        "signed_area": p.signed_area()?,
        "area": p.area()?,
        "perimeter": p.perimeter()?,
        "bounds": { "x": b.x, "y": b.y, "width": b.width, "height": b.height },
    }))
}

fn contains(input: &str, x: f64, y: f64) -> Result<()> {
    tracing::info!(input, x, y, "contains");
    let q = Pt2::new(x, y);
    let result = match load_geometry(input)? {
        Geometry::Contour(c) => c.contains(q),
        Geometry::Polygon(p) => p.contains(q),
    };
    let label = match result {
        Containment::Inside => "inside",
        Containment::Outside => "outside",
        Containment::Boundary => "boundary",
    };
    println!("{}", serde_json::json!({ "x": x, "y": y, "containment": label }));
    Ok(())
}

fn interpolate(input: &str, t: f64) -> Result<()> {
    tracing::info!(input, t, "interpolate");
    let c = match load_geometry(input)? {
        Geometry::Contour(c) => c,
        Geometry::Polygon(_) => bail!("interpolate expects a single contour input"),
    };
    let p = c.interpolate(t)?;
    println!("{}", serde_json::json!({ "t": t, "point": [p.x, p.y] }));
    Ok(())
}
