//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the [`World`] aggregate and the seeded RNG,
//! applies player commands, runs all systems, and produces
//! `GameStateSnapshot`s. It has no timer of its own: the caller drives it
//! by calling [`SimulationEngine::tick`] with the elapsed wall-clock time.

use std::collections::VecDeque;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bulwark_core::commands::{CommandOutcome, LaunchOutcome, PlayerCommand};
use bulwark_core::config::Tuning;
use bulwark_core::constants::*;
use bulwark_core::enums::StructureKind;
use bulwark_core::errors::CommandError;
use bulwark_core::state::GameStateSnapshot;
use bulwark_core::types::*;

use crate::orders;
use crate::systems;
use crate::world::World;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial speed multiplier (1.0 = real time).
    pub speed: f64,
    /// Headquarters location; the build zone is centered here.
    pub hq: GeoPoint,
    pub starting_cash: f64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed: 1.0,
            hq: GeoPoint::new(DEFAULT_HQ_LAT, DEFAULT_HQ_LON),
            starting_cash: STARTING_CASH,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    rng: ChaCha8Rng,
    paused: bool,
    speed: f64,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let speed = config.tuning.clamp_speed(config.speed);
        let mut world = World::new(config.hq, config.starting_cash, config.tuning);
        world_setup::spawn_resource_nodes(&mut world, &mut rng);

        info!(
            "New session: seed {}, HQ ({:.4}, {:.4}), cash {}",
            config.seed,
            world.hq.lat,
            world.hq.lon,
            world.economy.display_cash()
        );

        Self {
            world,
            rng,
            paused: false,
            speed,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_secs` of wall-clock time and return the
    /// resulting snapshot.
    ///
    /// Queued commands are applied first, even while paused. A queued
    /// command that is rejected changes nothing and records no event; its
    /// error is reported only as a Warning entry in the alert log, since
    /// there is no caller to hand it back to. Call the command methods
    /// directly to get the `CommandError` instead.
    ///
    /// While paused the world does not move. The scaled delta is integrated
    /// in equal sub-steps no longer than `max_substep_secs`.
    pub fn tick(&mut self, dt_secs: f64) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused {
            self.advance(dt_secs);
        }

        let events = self.world.telemetry.drain_events();
        systems::snapshot::build_snapshot(&self.world, self.paused, self.speed, events)
    }

    /// Current state without advancing. Pending events are included but
    /// not drained.
    pub fn snapshot(&self) -> GameStateSnapshot {
        let events = self.world.telemetry.pending_events().to_vec();
        systems::snapshot::build_snapshot(&self.world, self.paused, self.speed, events)
    }

    fn advance(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        let scaled = dt_secs * self.speed;
        let max_step = self.world.tuning.max_substep_secs;
        let steps = if max_step > 0.0 {
            (scaled / max_step).ceil().max(1.0) as u64
        } else {
            1
        };
        let step = scaled / steps as f64;
        for _ in 0..steps {
            self.step(step);
        }
    }

    /// One sub-step. The system order is fixed: it decides who shoots first.
    fn step(&mut self, dt: f64) {
        systems::wave_director::run(&mut self.world, &mut self.rng);
        systems::missile_flight::run(&mut self.world, &mut self.rng, dt);
        systems::impact::run(&mut self.world);
        systems::aircraft::run(&mut self.world, dt);
        systems::jets::run(&mut self.world, &mut self.rng, dt);
        systems::cleanup::run(&mut self.world);

        let depots = self.world.store.count_of_kind(StructureKind::ResourceDepot);
        self.world.economy.apply_income(dt, depots);
        self.world.time.advance(dt);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match self.apply_command(command.clone()) {
                Ok(outcome) => debug!("{command:?} -> {outcome:?}"),
                Err(err) => {
                    debug!("{command:?} rejected");
                    let tick = self.world.time.tick;
                    self.world.telemetry.rejected(err.to_string(), tick);
                }
            }
        }
    }

    /// Apply a single player command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<CommandOutcome, CommandError> {
        match command {
            PlayerCommand::Build { kind, lat, lon } => {
                let structure_id = self.build(kind, lat, lon)?;
                Ok(CommandOutcome::Built { structure_id })
            }
            PlayerCommand::Repair { structure_id } => {
                let cost = self.repair(structure_id)?;
                Ok(CommandOutcome::Repaired { structure_id, cost })
            }
            PlayerCommand::Demolish { structure_id } => {
                let refund = self.demolish(structure_id)?;
                Ok(CommandOutcome::Demolished {
                    structure_id,
                    refund,
                })
            }
            PlayerCommand::LaunchMissile { silo_id } => {
                let outcome = self.launch_missile(silo_id)?;
                Ok(CommandOutcome::Launched { silo_id, outcome })
            }
            PlayerCommand::DeployJet { airfield_id } => {
                let (jet_id, relaunched) = orders::deploy_jet(&mut self.world, airfield_id)?;
                Ok(CommandOutcome::JetDeployed { jet_id, relaunched })
            }
            PlayerCommand::RecallJet { jet_id } => {
                self.recall_jet(jet_id)?;
                Ok(CommandOutcome::JetRecalled { jet_id })
            }
            PlayerCommand::CollectResource { node_id, amount } => {
                let amount = self.collect_resource(node_id, amount)?;
                Ok(CommandOutcome::Collected { node_id, amount })
            }
            PlayerCommand::SetSpeed { factor } => Ok(CommandOutcome::SpeedSet {
                factor: self.set_speed(factor),
            }),
            PlayerCommand::Pause => {
                self.pause();
                Ok(CommandOutcome::Paused)
            }
            PlayerCommand::Resume => {
                self.resume();
                Ok(CommandOutcome::Resumed)
            }
        }
    }

    // --- Commands ---

    /// Build a structure. Returns its id.
    pub fn build(
        &mut self,
        kind: StructureKind,
        lat: f64,
        lon: f64,
    ) -> Result<StructureId, CommandError> {
        orders::build(&mut self.world, kind, GeoPoint::new(lat, lon))
    }

    /// Restore a structure to full health. Returns the cost.
    pub fn repair(&mut self, id: StructureId) -> Result<f64, CommandError> {
        orders::repair(&mut self.world, id)
    }

    /// Tear down a structure. Returns the refund.
    pub fn demolish(&mut self, id: StructureId) -> Result<f64, CommandError> {
        orders::demolish(&mut self.world, id)
    }

    pub fn launch_missile(&mut self, silo_id: StructureId) -> Result<LaunchOutcome, CommandError> {
        orders::launch_missile(&mut self.world, &mut self.rng, silo_id)
    }

    /// Deploy a jet from an airfield, relaunching a parked one if there is one.
    pub fn deploy_jet(&mut self, airfield_id: StructureId) -> Result<JetId, CommandError> {
        orders::deploy_jet(&mut self.world, airfield_id).map(|(id, _)| id)
    }

    pub fn recall_jet(&mut self, jet_id: JetId) -> Result<(), CommandError> {
        orders::recall_jet(&mut self.world, jet_id)
    }

    /// Harvest a resource node. Returns the amount credited.
    pub fn collect_resource(&mut self, node_id: NodeId, amount: u32) -> Result<u32, CommandError> {
        orders::collect_resource(&mut self.world, node_id, amount)
    }

    /// Set the speed multiplier. Returns the clamped value actually applied.
    pub fn set_speed(&mut self, factor: f64) -> f64 {
        if factor.is_finite() {
            self.speed = self.world.tuning.clamp_speed(factor);
        }
        self.speed
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    // --- Queries ---

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.world.time
    }

    pub fn cash(&self) -> f64 {
        self.world.economy.cash()
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to stage a situation.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
