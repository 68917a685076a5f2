//! Perfect-maze generation for pathgrid boards.

pub mod maze;

pub use maze::MazeGen;
