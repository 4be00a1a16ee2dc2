use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bodies::{Body, BodyIndex};
use crate::collision::{resolve_pair, resolve_walls};
use crate::core::events::CollisionEvent;
use crate::core::spawn::spawn_bodies;
use crate::core::{BodyStore, EventQueue, SimulationConfig};
use crate::error::SimulationError;
use crate::integration::{EulerIntegrator, Integrator};
use crate::math::Vector2;
use crate::Result;

/// The simulation state: an ordered set of bodies advanced one frame at a time
pub struct Simulation {
    /// All bodies, in scan order
    bodies: BodyStore,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Advances positions and applies gravity
    integrator: Box<dyn Integrator>,

    /// Contacts and wall hits from the most recent tick
    events: EventQueue,

    /// Number of completed ticks
    frame: u64,
}

impl Simulation {
    /// Creates a simulation populated according to the configuration's
    /// placement rule, using its seed for every random draw
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let bodies = spawn_bodies(&config, &mut rng)?;

        info!(
            "simulation created: {} bodies in {}x{}, gravity {}, {:?} exchange",
            bodies.len(),
            config.viewport_width,
            config.viewport_height,
            config.gravity,
            config.velocity_exchange
        );

        Ok(Self::assemble(config, bodies))
    }

    /// Creates a simulation from an explicit list of bodies.
    ///
    /// Bodies keep the given order, which is also the collision scan order.
    pub fn from_bodies<I>(config: SimulationConfig, bodies: I) -> Result<Self>
    where
        I: IntoIterator<Item = Body>,
    {
        config.validate()?;

        let bodies: BodyStore = bodies.into_iter().collect();
        for (index, body) in bodies.iter() {
            let diameter = body.get_diameter();
            if diameter > config.viewport_width || diameter > config.viewport_height {
                return Err(SimulationError::InvalidParameter(format!(
                    "body {} with radius {} does not fit in the viewport",
                    index,
                    body.get_radius()
                )));
            }
        }

        Ok(Self::assemble(config, bodies))
    }

    fn assemble(config: SimulationConfig, bodies: BodyStore) -> Self {
        Self {
            bodies,
            config,
            integrator: Box::new(EulerIntegrator::new()),
            events: EventQueue::new(),
            frame: 0,
        }
    }

    /// Replaces the integrator
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Advances every body by one frame.
    ///
    /// Bodies are processed in index order. Each one is moved by its
    /// velocity, separated from every later overlapping body, clamped to the
    /// viewport and finally accelerated by gravity. A pair is visited once per
    /// tick and later pairs see the corrections made by earlier ones.
    pub fn step(&mut self) {
        self.events.clear();

        for index in 0..self.bodies.len() {
            self.advance(index);
        }

        self.frame += 1;
        trace!("frame {} done, {} events", self.frame, self.events.len());
    }

    /// Runs the per-body update for a single body against all later bodies.
    ///
    /// `step` is the usual entry point; this is exposed for driving the scan
    /// by hand.
    pub fn step_body(&mut self, index: BodyIndex) -> Result<()> {
        self.bodies.get_body(index)?;
        self.advance(index);
        Ok(())
    }

    fn advance(&mut self, index: BodyIndex) {
        let viewport = self.config.viewport();
        let mode = self.config.velocity_exchange;

        if let Some(body) = self.bodies.get_mut(index) {
            self.integrator.integrate_position(body);
        }

        for other in (index + 1)..self.bodies.len() {
            if let Some(contact) = resolve_pair(&mut self.bodies, index, other, mode, &viewport) {
                self.events.push(CollisionEvent::Pair(contact));
            }
        }

        if let Some(body) = self.bodies.get_mut(index) {
            let sides = resolve_walls(body, &viewport);
            if !sides.is_empty() {
                trace!("body {} hit {:?}", index, sides);
                self.events.push(CollisionEvent::Wall { body: index, sides });
            }

            self.integrator.apply_gravity(body, self.config.gravity);
        }
    }

    /// Returns the bodies in scan order
    pub fn bodies(&self) -> &BodyStore {
        &self.bodies
    }

    /// Gets a body by index
    pub fn body(&self, index: BodyIndex) -> Result<&Body> {
        self.bodies.get_body(index)
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Events recorded during the most recent tick
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Number of ticks run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Name of the integrator in use
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Total kinetic energy, with every body treated as unit mass
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|(_, b)| b.kinetic_energy()).sum()
    }

    /// Total linear momentum, with every body treated as unit mass
    pub fn momentum(&self) -> Vector2 {
        self.bodies
            .iter()
            .fold(Vector2::zero(), |acc, (_, b)| acc + b.get_velocity())
    }
}
