use hecs::World;
use tracing::{debug, info};

use crate::systems::*;
use crate::{
    create_ball, create_paddle, create_room, CollisionOutcome, Config, ConfigError, FlowAction,
    FlowState, GameFlow, GameRng, InputEvent, PlayerInput, Scene, Score, Side,
};

/// Source of discrete input events, polled once per tick without blocking
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub state: FlowState,
    /// Only set while a rally is in play
    pub outcome: Option<CollisionOutcome>,
    pub score: Score,
}

/// A full match against the computer
pub struct Game {
    pub world: World,
    pub config: Config,
    pub scene: Scene,
    pub score: Score,
    pub rng: GameRng,
    pub flow: GameFlow,
    pub input: PlayerInput,
    pub computer: ComputerController,
}

impl Game {
    /// New match sitting in the menu
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_flow(config, seed, GameFlow::new())
    }

    /// New match starting from an arbitrary flow state
    pub fn with_flow(config: Config, seed: u64, flow: GameFlow) -> Result<Self, ConfigError> {
        config.validate()?;

        let scene = config.scene();
        let mut world = World::new();
        create_room(&mut world, &config);
        create_paddle(&mut world, &config, Side::Player);
        create_paddle(&mut world, &config, Side::Computer);
        create_ball(&mut world, &config, config.paddle_spawn(Side::Player));
        pin_ball(&mut world, flow.last_server());

        Ok(Self {
            world,
            computer: ComputerController::from_config(Side::Computer, &config),
            config,
            scene,
            score: Score::new(),
            rng: GameRng::new(seed),
            flow,
            input: PlayerInput::new(),
        })
    }

    /// Advance one tick: input, paddles, ball, collision, then scoring
    pub fn tick<I>(&mut self, events: I) -> TickReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        ingest_inputs(events, &mut self.input);
        if self.input.quit {
            self.flow.transition(FlowAction::Quit);
            return self.report(None);
        }

        let mut outcome = None;
        match self.flow.state() {
            FlowState::Menu => {
                apply_player_input(&mut self.world, &self.input, &self.config);
                move_paddles(&mut self.world, &self.scene);
                pin_ball(&mut self.world, Side::Player);
                if self.input.trigger {
                    self.flow.transition(FlowAction::Start);
                }
            }
            FlowState::Serving(Side::Player) => {
                apply_player_input(&mut self.world, &self.input, &self.config);
                drive_controller(&mut self.world, &self.computer, &self.scene);
                move_paddles(&mut self.world, &self.scene);
                pin_ball(&mut self.world, Side::Player);
                if self.input.trigger {
                    self.serve(Side::Player);
                }
            }
            FlowState::Serving(Side::Computer) => {
                apply_player_input(&mut self.world, &self.input, &self.config);
                let approaching =
                    drive_serve(&mut self.world, &mut self.computer, &self.scene, &mut self.rng);
                move_paddles(&mut self.world, &self.scene);
                pin_ball(&mut self.world, Side::Computer);
                if !approaching {
                    self.serve(Side::Computer);
                }
            }
            FlowState::Rally => {
                apply_player_input(&mut self.world, &self.input, &self.config);
                drive_controller(&mut self.world, &self.computer, &self.scene);
                move_paddles(&mut self.world, &self.scene);
                move_ball(&mut self.world);

                let result = check_collisions(&mut self.world, &self.config);
                outcome = Some(result);
                self.score_point(result);
            }
            FlowState::PointOver => {
                self.flow.transition(FlowAction::NextServe);
                if let FlowState::Serving(server) = self.flow.state() {
                    pin_ball(&mut self.world, server);
                }
            }
            FlowState::MatchOver { .. } | FlowState::Quit => {}
        }

        self.report(outcome)
    }

    /// Draw the current frame
    pub fn render(&mut self, renderer: &mut impl Renderer) {
        render_world(&mut self.world, &self.scene, renderer);
    }

    /// Cooperative frame loop: poll, tick, render, wait; returns the winner
    ///
    /// Ends on quit (no further frame is drawn) or when the match is decided.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> Option<Side> {
        let mut frames: u64 = 0;
        while !self.flow.is_finished() {
            let report = self.tick(input.poll());
            if report.state == FlowState::Quit {
                info!(frames, "quit requested");
                break;
            }

            self.render(renderer);
            frames += 1;

            if !self.config.frame_delay.is_zero() {
                std::thread::sleep(self.config.frame_delay);
            }
        }

        let winner = self.flow.winner();
        info!(frames, ?winner, score = ?self.score, "match loop finished");
        winner
    }

    fn serve(&mut self, server: Side) {
        launch_ball(&mut self.world, server, self.config.ball_serve_speed);
        self.flow.transition(FlowAction::Launch);
    }

    fn score_point(&mut self, outcome: CollisionOutcome) {
        let Some(scorer) = check_scoring(outcome, &mut self.score) else {
            return;
        };
        self.flow.transition(FlowAction::PointScored(scorer));

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.flow.transition(FlowAction::MatchWon(winner));
        } else {
            debug!(next = ?self.flow.last_server().opponent(), "waiting for next serve");
        }
    }

    fn report(&self, outcome: Option<CollisionOutcome>) -> TickReport {
        TickReport {
            state: self.flow.state(),
            outcome,
            score: self.score,
        }
    }
}
