use anyhow::{anyhow, Context, Result};
use gridbot::grid::{Grid, Heading};
use gridbot::robot::Robot;
use nalgebra::Point2;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated token reader over stdin.
struct Scanner<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    fn new(reader: R) -> Self {
        Scanner {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn token(&mut self) -> Result<String> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(t);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn int(&mut self) -> Result<i32> {
        let t = self.token()?;
        t.parse()
            .with_context(|| format!("expected an integer, got {t:?}"))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());

    println!("Enter top-right coordinates of plane");
    let m = scanner.int()?;
    let n = scanner.int()?;

    println!("Enter particle coordinates (enter -1 -1 to end particles input)");
    let mut obstacles = Vec::new();
    loop {
        let x = scanner.int()?;
        let y = scanner.int()?;
        if x == -1 && y == -1 {
            break;
        }
        obstacles.push(Point2::new(x, y));
    }

    println!("Enter robot position and direction");
    let x = scanner.int()?;
    let y = scanner.int()?;
    let dir = scanner.token()?;
    let heading = dir
        .chars()
        .next()
        .ok_or_else(|| anyhow!("missing direction character"))
        .and_then(Heading::try_from)?;

    println!("Enter commands for robot");
    let commands = scanner.token()?;

    let grid = Grid::new(m, n, obstacles)?;
    let mut robot = Robot::new(x, y, heading, grid)?;
    robot.follow(&commands);

    println!(
        "{} {} {}",
        robot.position().x,
        robot.position().y,
        robot.heading()
    );
    Ok(())
}
