use log::{debug, info};

use crate::core::Simulation;
use crate::driver::{EventSource, Renderer, WindowEvent};
use crate::Result;

/// Why the run loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The event source reported a quit request
    Quit {
        /// Frames completed before the request was seen
        frames: u64,
    },

    /// The configured frame limit was reached
    FrameLimit {
        /// Frames completed
        frames: u64,
    },
}

/// Runs the poll / step / render loop over a simulation.
///
/// Visuals are loaded once in `new`, one per body, and released when the
/// driver is dropped.
pub struct FrameDriver<R: Renderer, E: EventSource> {
    simulation: Simulation,
    renderer: R,
    event_source: E,
    visuals: Vec<R::Visual>,
}

impl<R: Renderer, E: EventSource> FrameDriver<R, E> {
    /// Creates a driver and loads a visual for every body
    pub fn new(simulation: Simulation, mut renderer: R, event_source: E) -> Result<Self> {
        let visual_id = simulation.config().visual_id.clone();
        let visuals = (0..simulation.bodies().len())
            .map(|_| renderer.load_visual(&visual_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            simulation,
            renderer,
            event_source,
            visuals,
        })
    }

    /// Runs until the event source asks to quit or the frame limit is hit.
    ///
    /// Collaborator failures abort the loop and are returned to the caller.
    pub fn run(&mut self) -> Result<Termination> {
        let limit = self.simulation.config().frame_limit;
        info!("frame driver started ({} bodies, limit {:?})", self.visuals.len(), limit);

        let termination = loop {
            if let Some(limit) = limit {
                if self.simulation.frame() >= limit {
                    break Termination::FrameLimit { frames: self.simulation.frame() };
                }
            }

            if !self.frame()? {
                break Termination::Quit { frames: self.simulation.frame() };
            }
        };

        info!("frame driver stopped: {:?}", termination);
        Ok(termination)
    }

    /// Runs a single frame. Returns `false` without stepping if a quit event
    /// was pending.
    pub fn frame(&mut self) -> Result<bool> {
        let events = self.event_source.poll_events()?;
        if events.iter().any(|e| *e == WindowEvent::Quit) {
            debug!("quit requested at frame {}", self.simulation.frame());
            return Ok(false);
        }

        self.simulation.step();
        self.render()?;
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        self.renderer.clear(self.simulation.config().background)?;
        for ((_, body), visual) in self.simulation.bodies().iter().zip(&self.visuals) {
            self.renderer.draw_visual(visual, &body.get_bounds())?;
        }
        self.renderer.present()
    }

    /// Returns the simulation being driven
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Returns the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tears the driver down, dropping the visuals first and handing back
    /// the simulation and collaborators
    pub fn into_parts(self) -> (Simulation, R, E) {
        let Self { simulation, renderer, event_source, visuals } = self;
        drop(visuals);
        (simulation, renderer, event_source)
    }
}
