use parallax::{
    EngineConfig, LayoutSnapshot, ParallaxDriver, Point, Rect, TransformTween, TransitionSpec,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let viewport_height = 900.0;
    let layout = LayoutSnapshot {
        container: Rect::new(0.0, 900.0, 1280.0, 1500.0),
        viewport_height,
    };
    let mut driver = ParallaxDriver::mount(EngineConfig::default(), layout)?;
    let mut tween = TransformTween::new(TransitionSpec::default(), driver.transform())?;

    // 60 Hz frames, the page scrolls 12px per frame while the pointer drifts right.
    let frame_secs = 1.0 / 60.0;
    for i in 0..90u32 {
        let now = f64::from(i) * frame_secs;
        let top = 900.0 - f64::from(i) * 12.0;
        driver.geometry_mut().container = Rect::new(0.0, top, 1280.0, top + 600.0);
        driver.scroll_event();
        driver.scroll_event();

        driver.pointer_move(Point::new(200.0 + f64::from(i) * 10.0, top + 300.0));
        if let Some(target) = driver.frame() {
            tween.retarget(target, now);
        } else {
            tween.retarget(driver.transform(), now);
        }

        if i % 15 == 0 {
            let shown = tween.sample(now);
            println!(
                "t={now:.3}s scale={:.4} rx={:.3} ry={:.3}",
                shown.scale, shown.rotate_x, shown.rotate_y
            );
        }
    }

    let layout = driver.unmount();
    println!("final container top: {}", layout.container.y0);
    Ok(())
}
