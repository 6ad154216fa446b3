
use ggez::{ Context, ContextBuilder, GameResult };
use ggez::conf::{ WindowMode, WindowSetup };
use ggez::event::{ self, EventHandler };
use ggez::graphics::{ self, Color, DrawParam, Mesh, Rect };

use hexgrid::grid::Frame;
use hexgrid::ui::canvas::Canvas;
use hexgrid::ui::render::{ self, Style };
use hexgrid_ggez::mesh;

use nalgebra::Point2;

const WIDTH: f32 = 1000.;
const HEIGHT: f32 = 700.;

/// The complete demo state.
struct State {
    frame: Frame,
    style: Style,
    canvas: Canvas,
    /// The meshes built from the canvas, replayed on every frame.
    meshes: Vec<Mesh>,
    /// The size of the drawable area.
    size: (f32, f32),
}

impl State {
    fn new(ctx: &Context, frame: Frame, style: Style) -> GameResult<State> {
        let (width, height) = ctx.gfx.drawable_size();
        let mut state = State {
            frame,
            style,
            canvas: Canvas::new(),
            meshes: Vec::new(),
            size: (width, height),
        };
        state.render(ctx, width, height)?;
        Ok(state)
    }

    /// Lay out the frame anew, centered in the drawable area.
    fn render(&mut self, ctx: &Context, width: f32, height: f32) -> GameResult<()> {
        let center = Point2::new(width / 2., height / 2.);
        let layout = render::render(&mut self.canvas, center, &self.frame, &self.style);
        log::debug!("Frame origin at {:?} with {} hexagons",
            layout.origin(), layout.centers().len());
        self.meshes = mesh::build(ctx, &self.canvas)?;
        self.size = (width, height);
        Ok(())
    }
}

impl EventHandler for State {
    fn update(&mut self, _ctx: &mut Context) -> GameResult<()> {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);
        // The y axis points upwards.
        let (width, height) = self.size;
        canvas.set_screen_coordinates(Rect::new(0., height, width, -height));
        for m in &self.meshes {
            canvas.draw(m, DrawParam::default());
        }
        canvas.finish(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        log::info!("Resized to {}x{}", width, height);
        self.render(ctx, width, height)
    }
}

fn main() -> GameResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (ctx, event_loop) = ContextBuilder::new("hexgrid", "roman")
        .window_setup(WindowSetup::default().title("Hexagon size and spacing"))
        .window_mode(WindowMode::default()
            .dimensions(WIDTH, HEIGHT)
            .resizable(true))
        .build()?;

    let state = State::new(&ctx, Frame::default(), Style::default())?;
    log::info!("Drawing {} instructions", state.canvas.instructions().len());

    event::run(ctx, event_loop, state)
}
