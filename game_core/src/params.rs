/// Game tuning parameters for the perspective court
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Scene
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 600.0;
    pub const SCENE_DEPTH: f32 = 2400.0;
    pub const DEPTH_RATIO: f32 = 0.25; // far wall renders at 25% of the near wall

    // Paddle
    pub const PADDLE_WIDTH: f32 = 160.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_KEY_SPEED: f32 = 12.0; // units per tick while an arrow key is held

    // Ball
    pub const BALL_SIZE: f32 = 40.0;
    pub const BALL_SERVE_SPEED: f32 = 30.0; // z units per tick
    pub const BALL_DEFLECTION: f32 = 6.0; // max lateral speed added by an edge hit

    // Computer
    pub const COMPUTER_SPEED: f32 = 8.0;
    pub const SERVE_EPSILON: f32 = 1.0;

    // Room
    pub const ROOM_RINGS: u32 = 6;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Loop
    pub const FRAME_DELAY_MS: u64 = 16; // ~60 Hz
}
