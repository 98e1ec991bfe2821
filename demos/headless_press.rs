use std::time::{Duration, Instant};

use calloop::EventLoop;
use expando::prelude::*;

/// Surface with no window behind it; it just logs repaint requests.
struct LogSurface {
    name: &'static str,
    bounds: Rect,
    margins: Padding,
    frames: u32,
}

impl RenderSurface for LogSurface {
    fn request_redraw(&mut self) {
        self.frames += 1;
        log::trace!("{}: redraw #{}", self.name, self.frames);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn content_margins(&self) -> Padding {
        self.margins
    }
}

fn main() -> expando::Result<()> {
    env_logger::init();

    let mut event_loop: EventLoop<'static, BorderHost> = EventLoop::try_new()?;
    let mut host = BorderHost::new(event_loop.handle());

    let button = host.registry.insert(ExpandingBorder::new(
        BorderConfig::spring().motion(SpringConfig::SNAPPY),
        LogSurface {
            name: "button",
            bounds: Rect::from_size(160.0, 48.0),
            margins: Padding::symmetric(12.0, 8.0),
            frames: 0,
        },
    )?);
    let card = host.registry.insert(ExpandingBorder::new(
        BorderConfig::linear().stroke_width(2.0),
        LogSurface {
            name: "card",
            bounds: Rect::from_size(240.0, 180.0),
            margins: Padding::all(24.0),
            frames: 0,
        },
    )?);
    host.registry.measure_all(Instant::now());

    for event in [Event::PressStart, Event::PressEnd] {
        for id in [button, card] {
            host.registry
                .dispatch(id, &event, Instant::now(), &mut host.scheduler);
        }

        let started = Instant::now();
        while !host.scheduler.is_idle() {
            event_loop.dispatch(Some(Duration::from_millis(20)), &mut host)?;
        }
        log::info!("{:?} settled in {:?}", event, started.elapsed());

        for id in [button, card] {
            if let Some(outline) = host.registry.get(id).and_then(ExpandingBorder::outline) {
                log::info!("  {:?}: {:?}", id, outline.points());
            }
        }
    }

    Ok(())
}
