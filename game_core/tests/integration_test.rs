use game_core::*;
use glam::{Vec2, Vec3};

fn test_config() -> Config {
    Config {
        frame_delay: std::time::Duration::ZERO,
        ..Config::new()
    }
}

fn ball(game: &Game) -> Ball {
    let mut query = game.world.query::<&Ball>();
    let (_e, ball) = query.iter().next().expect("ball exists");
    *ball
}

fn paddle(game: &Game, side: Side) -> Paddle {
    let mut query = game.world.query::<&Paddle>();
    let (_e, paddle) = query
        .iter()
        .find(|(_e, p)| p.side == side)
        .expect("paddle exists");
    *paddle
}

/// Renderer that only counts what it was asked to do
#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    rects: usize,
}

impl Renderer for CountingRenderer {
    fn clear(&mut self, _color: Color) {}
    fn draw_rectangle(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {
        self.rects += 1;
    }
    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _color: Color) {}
    fn present(&mut self) {
        self.frames += 1;
    }
}

/// Fires the launch trigger every tick, then quits
struct ScriptedInput {
    quit_after: usize,
    polls: usize,
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        if self.polls > self.quit_after {
            vec![InputEvent::Quit]
        } else {
            vec![InputEvent::PointerTrigger]
        }
    }
}

#[test]
fn test_match_point_on_computer_serve_ends_match() {
    // Player leads 2-0; the computer serves the next point and loses it
    let mut flow = GameFlow::serving(Side::Player);
    flow.transition(FlowAction::Launch);
    flow.transition(FlowAction::PointScored(Side::Player));
    let mut game = Game::with_flow(test_config(), 11, flow).expect("valid config");
    game.score = Score {
        player: 2,
        computer: 0,
    };
    assert_eq!(game.flow.state(), FlowState::PointOver);

    assert_eq!(game.tick([]).state, FlowState::Serving(Side::Computer));

    let mut ticks = 0;
    while game.tick([]).state != FlowState::Rally {
        ticks += 1;
        assert!(ticks < 200, "computer never served");
    }

    // Put the ball on course to cross the computer plane on the far side of its paddle
    let computer = paddle(&game, Side::Computer);
    let x = if computer.center().x < 400.0 { 760.0 } else { 0.0 };
    let y = if computer.center().y < 300.0 { 560.0 } else { 0.0 };
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.place(Vec3::new(x, y, game.config.scene_depth - 10.0));
        ball.vel = Vec3::new(0.0, 0.0, 30.0);
    }

    let report = game.tick([]);
    assert_eq!(report.outcome, Some(CollisionOutcome::ComputerMiss));
    assert_eq!(
        report.state,
        FlowState::MatchOver {
            winner: Side::Player
        }
    );
    assert_eq!(report.score.player, 3);
    assert_eq!(game.flow.winner(), Some(Side::Player));
}

#[test]
fn test_player_return_comes_back_deflected() {
    let mut game =
        Game::with_flow(test_config(), 5, GameFlow::serving(Side::Computer)).expect("valid config");
    while game.tick([]).state != FlowState::Rally {}

    // Ball flies straight at the player; line the paddle up 40 units off its centre
    let incoming = ball(&game);
    assert!(incoming.heading_to(Side::Player));
    let offset = if incoming.center().x > 400.0 { -40.0 } else { 40.0 };
    let aim = incoming.center() + Vec2::new(offset, 0.0);

    let mut hit = false;
    for _ in 0..200 {
        let report = game.tick([InputEvent::PointerMove {
            x: aim.x,
            y: aim.y,
        }]);
        if report.outcome == Some(CollisionOutcome::PlayerHit) {
            hit = true;
            break;
        }
        assert_eq!(report.state, FlowState::Rally, "rally ended early");
    }

    assert!(hit, "player paddle should return the serve");
    let returned = ball(&game);
    assert!(returned.heading_to(Side::Computer));
    assert_eq!(
        returned.vel.x,
        -offset.signum() * 3.0,
        "quarter-width off centre gives half the deflection, away from centre"
    );
    assert_eq!(returned.vel.y, 0.0, "centred vertically, no vertical deflection");
}

#[test]
fn test_run_loop_quits_and_renders_each_frame() {
    let mut game =
        Game::with_flow(test_config(), 2, GameFlow::serving(Side::Player)).expect("valid config");
    let mut input = ScriptedInput {
        quit_after: 25,
        polls: 0,
    };
    let mut renderer = CountingRenderer::default();

    let winner = game.run(&mut input, &mut renderer);

    assert_eq!(winner, None, "quit before anyone won");
    assert_eq!(game.flow.state(), FlowState::Quit);
    assert_eq!(renderer.frames, 25, "no frame after the quit tick");
    assert_eq!(renderer.rects, 3 * 25, "two paddles and a ball every frame");
}

#[test]
fn test_computer_wins_against_a_player_who_never_returns() {
    let mut game = Game::new(test_config(), 42).expect("valid config");
    let win_score = game.config.win_score;

    let mut servers = Vec::new();
    let mut ticks = 0u32;
    while !game.flow.is_finished() {
        // Keep the paddle in the quadrant opposite the ball
        let center = ball(&game).center();
        let x = if center.x < 400.0 { 720.0 } else { 80.0 };
        let y = if center.y < 300.0 { 540.0 } else { 60.0 };

        let report = game.tick([
            InputEvent::PointerMove { x, y },
            InputEvent::PointerTrigger,
        ]);
        if let FlowState::Serving(side) = report.state {
            if servers.last() != Some(&side) {
                servers.push(side);
            }
        }
        assert_ne!(report.outcome, Some(CollisionOutcome::PlayerHit));
        assert_ne!(report.outcome, Some(CollisionOutcome::ComputerMiss));

        ticks += 1;
        assert!(ticks < 10_000, "match never finished");
    }

    assert_eq!(game.flow.winner(), Some(Side::Computer));
    assert_eq!(
        game.score,
        Score {
            player: 0,
            computer: win_score
        }
    );
    assert_eq!(servers, vec![Side::Player, Side::Computer, Side::Player]);
}
