use bouncing_circles::{
    Color, EventSource, FrameDriver, Rect, Renderer, Simulation, SimulationConfig, Termination,
    VelocityExchange, WindowEvent,
    error::SimulationError,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

const FRAME_DURATION: Duration = Duration::from_millis(16); // ~60 FPS
const BALL_CHARS: [char; 5] = ['●', '○', '◆', '◇', '■'];
const BALL_COLORS: [style::Color; 5] = [
    style::Color::Red,
    style::Color::Green,
    style::Color::Blue,
    style::Color::Yellow,
    style::Color::Magenta,
];

fn io_error(e: std::io::Error) -> SimulationError {
    SimulationError::Collaborator(e.to_string())
}

/// Puts the terminal in raw mode for as long as it lives
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self, std::io::Error> {
        terminal::enable_raw_mode()?;
        stdout().execute(Hide)?.execute(Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(ResetColor);
        let _ = out.execute(Clear(ClearType::All));
        let _ = out.execute(Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// A glyph standing in for a circle texture
struct Glyph {
    ch: char,
    color: style::Color,
}

/// Renders the viewport scaled down onto the terminal's character grid
struct TerminalRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<Option<(char, style::Color)>>,
    background: style::Color,
    loaded: usize,
    last_present: Instant,
}

impl TerminalRenderer {
    fn new(viewport: &Rect) -> Result<Self, std::io::Error> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out: stdout(),
            cols,
            rows,
            scale_x: cols as f32 / viewport.w,
            scale_y: rows as f32 / viewport.h,
            cells: vec![None; cols as usize * rows as usize],
            background: style::Color::Reset,
            loaded: 0,
            last_present: Instant::now(),
        })
    }
}

impl Renderer for TerminalRenderer {
    type Visual = Glyph;

    fn load_visual(&mut self, _id: &str) -> bouncing_circles::Result<Glyph> {
        let glyph = Glyph {
            ch: BALL_CHARS[self.loaded % BALL_CHARS.len()],
            color: BALL_COLORS[self.loaded % BALL_COLORS.len()],
        };
        self.loaded += 1;
        Ok(glyph)
    }

    fn clear(&mut self, color: Color) -> bouncing_circles::Result<()> {
        self.background = style::Color::Rgb { r: color.r, g: color.g, b: color.b };
        self.cells.iter_mut().for_each(|c| *c = None);
        Ok(())
    }

    fn draw_visual(&mut self, visual: &Glyph, bounds: &Rect) -> bouncing_circles::Result<()> {
        let center = bounds.center();
        let (rx, ry) = (bounds.w * 0.5, bounds.h * 0.5);

        let col_start = (bounds.x * self.scale_x).floor().max(0.0) as u16;
        let col_end = ((bounds.right() * self.scale_x).ceil() as u16).min(self.cols);
        let row_start = (bounds.y * self.scale_y).floor().max(0.0) as u16;
        let row_end = ((bounds.bottom() * self.scale_y).ceil() as u16).min(self.rows);

        for row in row_start..row_end {
            for col in col_start..col_end {
                // Sample the middle of the cell in viewport space
                let x = (col as f32 + 0.5) / self.scale_x;
                let y = (row as f32 + 0.5) / self.scale_y;
                let dx = (x - center.x) / rx;
                let dy = (y - center.y) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.cells[row as usize * self.cols as usize + col as usize] = Some((visual.ch, visual.color));
                }
            }
        }
        Ok(())
    }

    fn present(&mut self) -> bouncing_circles::Result<()> {
        self.out.queue(SetBackgroundColor(self.background)).map_err(io_error)?;
        for row in 0..self.rows {
            self.out.queue(MoveTo(0, row)).map_err(io_error)?;
            for col in 0..self.cols {
                match self.cells[row as usize * self.cols as usize + col as usize] {
                    Some((ch, color)) => {
                        self.out
                            .queue(SetForegroundColor(color))
                            .and_then(|o| o.queue(Print(ch)))
                            .map_err(io_error)?;
                    }
                    None => {
                        self.out.queue(Print(' ')).map_err(io_error)?;
                    }
                }
            }
        }
        self.out.flush().map_err(io_error)?;

        // Stand-in for vsync
        let elapsed = self.last_present.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
        self.last_present = Instant::now();
        Ok(())
    }
}

/// Maps 'q', Esc and Ctrl-C to a quit request
struct KeyboardEvents;

impl EventSource for KeyboardEvents {
    fn poll_events(&mut self) -> bouncing_circles::Result<Vec<WindowEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).map_err(io_error)? {
            let translated = match event::read().map_err(io_error)? {
                Event::Key(KeyEvent { code: KeyCode::Char('q'), .. })
                | Event::Key(KeyEvent { code: KeyCode::Esc, .. }) => WindowEvent::Quit,
                Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, .. })
                    if modifiers.contains(KeyModifiers::CONTROL) => WindowEvent::Quit,
                _ => WindowEvent::Other,
            };
            events.push(translated);
        }
        Ok(events)
    }
}

fn run() -> Result<Termination, Box<dyn std::error::Error>> {
    let mode = if std::env::args().any(|a| a == "--swap") {
        VelocityExchange::Swap
    } else {
        VelocityExchange::NormalResolved
    };
    let config = SimulationConfig::default()
        .with_velocity_exchange(mode)
        .with_seed(std::process::id() as u64);

    let simulation = Simulation::new(config)?;
    let renderer = TerminalRenderer::new(&simulation.config().viewport())?;

    let _guard = TerminalGuard::acquire()?;
    let mut driver = FrameDriver::new(simulation, renderer, KeyboardEvents)?;
    Ok(driver.run()?)
}

fn main() {
    match run() {
        Ok(termination) => println!("stopped: {:?}", termination),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
