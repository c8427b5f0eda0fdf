use grid::{legal_actions, Action, Adjacency, Cell, GRID_WIDTH};
use std::str::FromStr;

use crate::frame::{value, Frame, FRAME_SIZE};
use crate::RenderError;

/// Pixels per cell along each axis.
const CELL_PIXELS: usize = 3;

/// Output modes understood by [`MazeRenderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    RgbArray,
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb_array" => Ok(RenderMode::RgbArray),
            other => Err(RenderError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Top-left pixel of the 3×3 block for `cell`.
///
/// Grid rows are drawn bottom-up so that north (+5) points up in the image.
fn block_origin(cell: Cell) -> (usize, usize) {
    let row = GRID_WIDTH - 1 - cell.row();
    (1 + row * CELL_PIXELS, 1 + cell.column() * CELL_PIXELS)
}

fn block_centre(cell: Cell) -> (usize, usize) {
    let (r, c) = block_origin(cell);
    (r + 1, c + 1)
}

/// Draws the board and the robot on it.
#[derive(Debug, Clone)]
pub struct MazeRenderer {
    maze: Frame,
}

impl MazeRenderer {
    /// Paints the static maze: border, walls on every blocked side, prize
    /// and monster markers in the block centres.
    #[must_use]
    pub fn new(table: &Adjacency, prize_cells: &[Cell], monster: Cell) -> Self {
        let mut maze = Frame::filled(FRAME_SIZE, FRAME_SIZE, value::FLOOR);
        let last = FRAME_SIZE - 1;
        maze.fill_row(0, 0..FRAME_SIZE, value::BORDER);
        maze.fill_row(last, 0..FRAME_SIZE, value::BORDER);
        maze.fill_col(0, 0..FRAME_SIZE, value::BORDER);
        maze.fill_col(last, 0..FRAME_SIZE, value::BORDER);

        for cell in table.cells() {
            let (r, c) = block_origin(cell);
            let block = CELL_PIXELS;
            let open = legal_actions(table, cell);
            for action in Action::ALL.into_iter().filter(|a| !open.contains(a)) {
                match action {
                    Action::North => maze.fill_row(r, c..c + block, value::WALL),
                    Action::South => maze.fill_row(r + block - 1, c..c + block, value::WALL),
                    Action::East => maze.fill_col(c + block - 1, r..r + block, value::WALL),
                    Action::West => maze.fill_col(c, r..r + block, value::WALL),
                }
            }
        }

        for &cell in prize_cells {
            let (r, c) = block_centre(cell);
            maze.set(r, c, value::PRIZE);
        }
        let (r, c) = block_centre(monster);
        maze.set(r, c, value::MONSTER);

        Self { maze }
    }

    /// The static maze without the robot.
    #[must_use]
    pub fn maze(&self) -> &Frame {
        &self.maze
    }

    /// Snapshot of the board with the robot at `agent`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedMode`] for any mode other than
    /// `"rgb_array"`.
    pub fn render(&self, mode: &str, agent: Cell) -> Result<Frame, RenderError> {
        match mode.parse::<RenderMode>()? {
            RenderMode::RgbArray => {
                let mut img = self.maze.clone();
                let (r, c) = block_centre(agent);
                img.set(r, c, value::AGENT);
                Ok(img)
            }
        }
    }
}
