//! Fire scene: black backdrop, periodic ignite toggle, fixed-rate ticks

use crate::config::FireConfig;
use crate::fire::{draw_frame, FireFrame, FireSimulation, GridGeometry, PixelCanvas, Rgba};
use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use rand::prelude::*;
use std::io;
use std::time::{Duration, Instant};

/// Scene backdrop, shown wherever the fire is transparent
pub const BACKGROUND: Rgba = Rgba::rgb(0, 0, 0);

/// Ticks to catch up at most after a stall, so a long pause can't spiral
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Drives a `FireSimulation` from surface size and wall-clock time
pub struct FireScene {
    config: FireConfig,
    rng: StdRng,
    sim: Option<FireSimulation>,
    frame: Option<FireFrame>,
    ignite: bool,
    last_toggle: Instant,
    last_tick: Instant,
}

impl FireScene {
    pub fn new(config: FireConfig, now: Instant) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            sim: None,
            frame: None,
            ignite: true,
            last_toggle: now,
            last_tick: now,
        }
    }

    pub fn ignite(&self) -> bool {
        self.ignite
    }

    pub fn set_ignite(&mut self, ignite: bool) {
        self.ignite = ignite;
    }

    /// Latest published grid, if a surface has been seen
    pub fn frame(&self) -> Option<&FireFrame> {
        self.frame.as_ref()
    }

    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.sim.as_ref().map(|s| s.geometry())
    }

    /// Match the grid to the surface. A new grid replaces the old one and is
    /// seeded before it can be stepped. A zero-sized surface drops the grid.
    pub fn fit(&mut self, width_px: usize, height_px: usize) -> Option<GridGeometry> {
        let Some(geometry) = GridGeometry::compute(width_px, height_px, self.config.density) else {
            if self.sim.take().is_some() {
                log::debug!("Surface {}x{} is empty, fire suspended", width_px, height_px);
            }
            self.frame = None;
            return None;
        };

        let unchanged = self.sim.as_ref().is_some_and(|s| s.geometry().same_grid(&geometry));
        if !unchanged {
            log::debug!(
                "Fire grid {}x{} cells of {}px for {}x{} surface",
                geometry.width_cells,
                geometry.height_cells,
                geometry.cell_size_px,
                width_px,
                height_px
            );
            match self.sim.as_mut() {
                Some(sim) => sim.allocate(geometry),
                None => self.sim = Some(FireSimulation::new(geometry)),
            }
        }

        if let Some(sim) = self.sim.as_mut() {
            if sim.sync_ignite(self.ignite) {
                log::debug!("Bottom row seeded, ignite = {}", self.ignite);
            }
            self.frame = Some(sim.snapshot());
        }
        Some(geometry)
    }

    /// Advance one tick and publish the result
    pub fn tick(&mut self) {
        if let Some(sim) = self.sim.as_mut() {
            sim.sync_ignite(self.ignite);
            sim.step(self.config.wind, self.config.column_bound, &mut self.rng);
            self.frame = Some(sim.snapshot());
        }
    }

    /// Per-frame update: refit to the surface, flip ignite when the toggle
    /// period has elapsed, then run every tick that came due.
    /// Returns the number of ticks stepped.
    pub fn update(&mut self, now: Instant, width_px: usize, height_px: usize) -> u32 {
        if self.config.toggle && now.duration_since(self.last_toggle) >= self.config.toggle_interval {
            self.ignite = !self.ignite;
            self.last_toggle = now;
            log::info!("Fire {}", if self.ignite { "ignited" } else { "extinguished" });
        }

        if self.fit(width_px, height_px).is_none() {
            self.last_tick = now;
            return 0;
        }

        let mut ticks = 0;
        while now.duration_since(self.last_tick) >= self.config.tick_interval {
            if ticks == MAX_CATCH_UP_TICKS {
                self.last_tick = now;
                break;
            }
            self.tick();
            self.last_tick += self.config.tick_interval;
            ticks += 1;
        }
        ticks
    }

    /// Restart both timers, e.g. after a pause
    pub fn reset_clock(&mut self, now: Instant) {
        self.last_toggle = now;
        self.last_tick = now;
    }

    /// Time left before the next tick is due
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        (self.last_tick + self.config.tick_interval).saturating_duration_since(now)
    }
}

/// Rasterize the scene into the terminal back buffer
fn render(scene: &FireScene, canvas: &mut PixelCanvas, term: &mut Terminal) {
    let (pw, ph) = term.pixel_size();
    canvas.resize(pw, ph);
    match scene.frame() {
        Some(frame) => draw_frame(frame, canvas),
        None => canvas.clear(),
    }
    term.blit(canvas, BACKGROUND);
}

/// Run the fire scene interactively until `q` or Esc
pub fn run(config: FireConfig) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    term.clear_screen()?;

    let mut scene = FireScene::new(config, Instant::now());
    let mut canvas = PixelCanvas::new(0, 0);
    let mut paused = false;

    loop {
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or(term.size());
        if (new_w, new_h) != term.size() {
            log::debug!("Terminal resized to {}x{}", new_w, new_h);
            term.resize(new_w, new_h);
            term.clear_screen()?;
        }

        if let Some((code, _mods)) = term.check_key()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(' ') => {
                    paused = !paused;
                    if !paused {
                        scene.reset_clock(Instant::now());
                    }
                }
                _ => {}
            }
        }

        if paused {
            term.sleep(Duration::from_millis(100));
            continue;
        }

        let (pw, ph) = term.pixel_size();
        scene.update(Instant::now(), pw, ph);
        render(&scene, &mut canvas, &mut term);
        term.present()?;

        // Wake at least every 50ms to notice keys and resizes
        let wait = scene.until_next_tick(Instant::now()).min(Duration::from_millis(50));
        term.sleep(wait);
    }

    Ok(())
}

/// Run `ticks` steps with the fire lit and print the final frame
pub fn print(config: FireConfig, ticks: u32) -> io::Result<()> {
    let (w, h) = crossterm::terminal::size()
        .ok()
        .filter(|&(w, h)| w > 0 && h > 0)
        .unwrap_or((80, 24));
    let mut term = Terminal::headless(w, h);

    let mut scene = FireScene::new(config, Instant::now());
    scene.set_ignite(true);
    let (pw, ph) = term.pixel_size();
    if scene.fit(pw, ph).is_some() {
        for _ in 0..ticks {
            scene.tick();
        }
    }

    let mut canvas = PixelCanvas::new(pw, ph);
    render(&scene, &mut canvas, &mut term);
    term.print_to_stdout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::MAX_INTENSITY;

    fn config() -> FireConfig {
        FireConfig {
            seed: Some(1),
            ..FireConfig::default()
        }
    }

    fn bottom_row(scene: &FireScene) -> Vec<u8> {
        let frame = scene.frame().unwrap();
        frame.cells()[frame.geometry().bottom_row_start()..].to_vec()
    }

    #[test]
    fn first_fit_allocates_and_seeds() {
        let mut scene = FireScene::new(config(), Instant::now());
        let g = scene.fit(1000, 180).unwrap();
        assert_eq!((g.width_cells, g.height_cells), (250, 50));
        assert!(bottom_row(&scene).iter().all(|&c| c == MAX_INTENSITY));
    }

    #[test]
    fn empty_surface_has_no_frame() {
        let start = Instant::now();
        let mut scene = FireScene::new(config(), start);
        assert_eq!(scene.update(start + Duration::from_secs(1), 0, 40), 0);
        assert!(scene.frame().is_none());
        assert!(scene.geometry().is_none());
    }

    #[test]
    fn ticks_follow_the_clock() {
        let start = Instant::now();
        let mut scene = FireScene::new(config(), start);
        assert_eq!(scene.update(start, 80, 48), 0);
        assert_eq!(scene.update(start + Duration::from_millis(250), 80, 48), 2);
        assert_eq!(scene.update(start + Duration::from_millis(299), 80, 48), 0);
        assert_eq!(scene.update(start + Duration::from_millis(300), 80, 48), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let start = Instant::now();
        let mut scene = FireScene::new(config(), start);
        scene.update(start, 80, 48);
        let later = start + Duration::from_secs(3);
        assert_eq!(scene.update(later, 80, 48), MAX_CATCH_UP_TICKS);
        assert_eq!(scene.until_next_tick(later), Duration::from_millis(100));
    }

    #[test]
    fn toggle_extinguishes_then_reignites() {
        let start = Instant::now();
        let mut scene = FireScene::new(config(), start);
        scene.update(start, 80, 48);
        assert!(scene.ignite());

        scene.update(start + Duration::from_millis(5000), 80, 48);
        assert!(!scene.ignite());
        assert!(bottom_row(&scene).iter().all(|&c| c == 0));

        scene.update(start + Duration::from_millis(10_000), 80, 48);
        assert!(scene.ignite());
        assert!(bottom_row(&scene).iter().all(|&c| c == MAX_INTENSITY));
    }

    #[test]
    fn fixed_fire_never_toggles() {
        let start = Instant::now();
        let mut scene = FireScene::new(FireConfig { toggle: false, ..config() }, start);
        scene.update(start + Duration::from_secs(60), 80, 48);
        assert!(scene.ignite());
    }

    #[test]
    fn resize_replaces_grid() {
        let start = Instant::now();
        let mut scene = FireScene::new(config(), start);
        scene.update(start, 80, 48);
        scene.update(start + Duration::from_millis(500), 80, 48);
        let old = scene.frame().unwrap().clone();

        scene.update(start + Duration::from_millis(500), 200, 48);
        let frame = scene.frame().unwrap();
        assert_eq!(frame.geometry().width_cells, 200);
        assert_ne!(frame.cells().len(), old.cells().len());
        // Fresh grid: cold everywhere except the seeded bottom row
        let start_idx = frame.geometry().bottom_row_start();
        assert!(frame.cells()[..start_idx].iter().all(|&c| c == 0));
        assert!(bottom_row(&scene).iter().all(|&c| c == MAX_INTENSITY));
    }

    #[test]
    fn same_seed_same_fire() {
        let run = || {
            let start = Instant::now();
            let mut scene = FireScene::new(config(), start);
            scene.fit(120, 60);
            for _ in 0..25 {
                scene.tick();
            }
            scene.frame().unwrap().cells().to_vec()
        };
        assert_eq!(run(), run());
    }
}
