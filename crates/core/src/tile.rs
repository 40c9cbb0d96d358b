//! Tile module - one pipe cell and its flow table
//!
//! A tile is a pipe kind plus a cardinal angle. The flow table below is the single
//! source of truth for which sides a pipe connects; the renderer derives the open
//! sides from the same data via [`Tile::openings`].

use arrayvec::ArrayVec;

use crate::types::{Angle, Direction, Flow, PipeKind};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub pipe: PipeKind,
    pub angle: Angle,
}

impl Tile {
    pub fn new(pipe: PipeKind, angle: Angle) -> Self {
        Self { pipe, angle }
    }

    /// Start tile in its canonical orientation (outlet to the right).
    pub fn start() -> Self {
        Self::new(PipeKind::Start, Angle::Deg0)
    }

    /// End tile in its canonical orientation (accepts water travelling right).
    pub fn end() -> Self {
        Self::new(PipeKind::End, Angle::Deg0)
    }

    pub fn rotate_cw(&mut self) {
        self.angle = self.angle.rotate_cw();
    }

    pub fn rotate_ccw(&mut self) {
        self.angle = self.angle.rotate_ccw();
    }

    pub fn rotate(&mut self, clockwise: bool) {
        if clockwise {
            self.rotate_cw();
        } else {
            self.rotate_ccw();
        }
    }

    /// Direction water leaves the Start tile in, read from its angle.
    pub fn outlet(&self) -> Direction {
        match self.angle {
            Angle::Deg0 => Direction::Right,
            Angle::Deg90 => Direction::Up,
            Angle::Deg180 => Direction::Left,
            Angle::Deg270 => Direction::Down,
        }
    }

    /// Where water travelling `entry` goes after passing through this tile.
    ///
    /// `None` means the tile does not accept water from that side. Start tiles
    /// always return `None`; their outlet is read with [`Tile::outlet`].
    pub fn exit_direction(&self, entry: Direction) -> Option<Flow> {
        use Angle::*;
        use Direction::*;

        match self.pipe {
            PipeKind::Straight => {
                let pass = match entry {
                    Right | Left => self.angle.is_horizontal(),
                    Up | Down => !self.angle.is_horizontal(),
                };
                pass.then_some(Flow::Travel(entry))
            }
            PipeKind::Bend => {
                let exit = match (entry, self.angle) {
                    (Right, Deg0) | (Left, Deg90) => Down,
                    (Right, Deg270) | (Left, Deg180) => Up,
                    (Down, Deg180) | (Up, Deg90) => Right,
                    (Down, Deg270) | (Up, Deg0) => Left,
                    _ => return None,
                };
                Some(Flow::Travel(exit))
            }
            PipeKind::Cross => {
                let horizontal = self.angle.is_horizontal();
                let exit = match (entry, horizontal) {
                    (Right, true) | (Left, false) => Down,
                    (Right, false) | (Left, true) => Up,
                    (Down, true) | (Up, false) => Right,
                    (Down, false) | (Up, true) => Left,
                };
                Some(Flow::Travel(exit))
            }
            PipeKind::End => {
                let accepts = matches!(
                    (entry, self.angle),
                    (Right, Deg0) | (Left, Deg180) | (Down, Deg270) | (Up, Deg90)
                );
                accepts.then_some(Flow::EndReached)
            }
            PipeKind::Start => None,
        }
    }

    /// Sides of the cell the pipe touches.
    ///
    /// For a Cross this is both elbows; use [`Tile::elbow`] to split them.
    pub fn openings(&self) -> ArrayVec<Direction, 4> {
        let mut out = ArrayVec::new();
        match self.pipe {
            PipeKind::Start => out.push(self.outlet()),
            // Inlet side faces against the accepted travel direction.
            PipeKind::End => out.push(Direction::Left.rotated_by(self.angle)),
            PipeKind::Straight => {
                if self.angle.is_horizontal() {
                    out.push(Direction::Left);
                    out.push(Direction::Right);
                } else {
                    out.push(Direction::Up);
                    out.push(Direction::Down);
                }
            }
            PipeKind::Bend => out.extend(bend_sides(self.angle)),
            PipeKind::Cross => {
                out.extend(bend_sides(self.angle));
                out.extend(bend_sides(self.angle.rotate_ccw().rotate_ccw()));
            }
        }
        out
    }

    /// Sides of one Cross elbow.
    ///
    /// `lower == true` is the elbow a Bend at the same angle would have; the other
    /// elbow is that bend turned half a revolution.
    pub fn elbow(&self, lower: bool) -> [Direction; 2] {
        if lower {
            bend_sides(self.angle)
        } else {
            bend_sides(self.angle.rotate_ccw().rotate_ccw())
        }
    }
}

/// Open sides of a Bend: 0 = left+down, rotating counter-clockwise.
fn bend_sides(angle: Angle) -> [Direction; 2] {
    [
        Direction::Left.rotated_by(angle),
        Direction::Down.rotated_by(angle),
    ]
}
