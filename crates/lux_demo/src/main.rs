//! Renders the soft shadow demo scenes to PNG files.
//!
//! Usage: `lux_demo [settings.json]`. Without a settings file every
//! available core is used with 9 shadow samples per light.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use lux_core::{AmbientLight, Material, Scene, Sphere, SpotLight, Triangle};
use lux_math::{Color, Point, Vector};
use lux_renderer::{Camera, ImageWriter, RenderSettings, SimpleRayTracer};

fn load_settings() -> Result<RenderSettings> {
    let Some(path) = std::env::args().nth(1) else {
        let threads = std::thread::available_parallelism().map_or(0, |n| n.get());
        return Ok(RenderSettings {
            threads,
            samples: 9,
            ..RenderSettings::default()
        });
    };

    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let settings = serde_json::from_str(&text).with_context(|| format!("parsing {}", path))?;
    log::info!("Loaded settings from {}", path);
    Ok(settings)
}

fn shiny() -> Material {
    Material::new().with_kd(0.5).with_ks(0.5).with_shininess(30)
}

/// A sphere casting a soft shadow onto a small triangle.
fn sphere_triangle_scene() -> Result<Scene> {
    let mut scene = Scene::new("shadowSphereTriangleSoft");
    scene.add_geometry(
        Sphere::new(Point::new(0.0, 0.0, -200.0), 60.0)?
            .with_emission(Color::BLUE)
            .with_material(shiny()),
    );
    scene.add_geometry(
        Triangle::new(
            Point::new(-70.0, -40.0, 0.0),
            Point::new(-40.0, -70.0, 0.0),
            Point::new(-68.0, -68.0, -4.0),
        )?
        .with_emission(Color::BLUE)
        .with_material(shiny()),
    );
    scene.add_light(
        SpotLight::new(
            Color::new(400.0, 240.0, 0.0),
            Point::new(-100.0, -100.0, 200.0),
            Vector::new(1.0, 1.0, -3.0)?,
        )
        .with_kl(1e-5)
        .with_kq(1.5e-7)
        .with_radius(10.0),
    );
    Ok(scene)
}

/// Two large triangles under a sphere lit by a spot light.
fn triangles_sphere_scene() -> Result<Scene> {
    let floor = Material::new().with_ks(0.8).with_shininess(60);
    let mut scene = Scene::new("shadowTrianglesSphereSoft")
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.15));
    scene.add_geometry(
        Triangle::new(
            Point::new(-150.0, -150.0, -115.0),
            Point::new(150.0, -150.0, -135.0),
            Point::new(75.0, 75.0, -150.0),
        )?
        .with_material(floor),
    );
    scene.add_geometry(
        Triangle::new(
            Point::new(-150.0, -150.0, -115.0),
            Point::new(-70.0, 70.0, -140.0),
            Point::new(75.0, 75.0, -150.0),
        )?
        .with_material(floor),
    );
    scene.add_geometry(
        Sphere::new(Point::new(0.0, 0.0, -11.0), 30.0)?
            .with_emission(Color::BLUE)
            .with_material(shiny()),
    );
    scene.add_light(
        SpotLight::new(
            Color::new(700.0, 400.0, 400.0),
            Point::new(40.0, 40.0, 115.0),
            Vector::new(-1.0, -1.0, -4.0)?,
        )
        .with_kl(4e-4)
        .with_kq(2e-5)
        .with_radius(10.0),
    );
    Ok(scene)
}

fn render(scene: Scene, resolution: usize, settings: &RenderSettings) -> Result<()> {
    let name = scene.name.clone();
    let camera = Camera::builder()
        .with_location(Point::new(0.0, 0.0, 1000.0))
        .with_direction(-Vector::Z, Vector::Y)
        .with_vp_distance(1000.0)
        .with_vp_size(200.0, 200.0)
        .with_image_writer(ImageWriter::new(&name, resolution, resolution))
        .with_ray_tracer(Arc::new(SimpleRayTracer::new(Arc::new(scene))))
        .with_settings(settings)
        .build()
        .with_context(|| format!("building camera for {}", name))?;

    camera.render_image()?;
    camera.write_to_image()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Lux demo");
    let settings = load_settings()?;

    render(sphere_triangle_scene()?, 400, &settings)?;
    render(triangles_sphere_scene()?, 600, &settings)?;

    log::info!("Images written to {}", settings.output_dir.display());
    Ok(())
}
