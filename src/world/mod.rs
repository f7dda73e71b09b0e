mod grid;
mod pose;
mod scene;
mod texture;

pub use grid::{Cell, GridError, GridMap, MapLegend};

pub use pose::{Pose, direction, heading, wrap_angle};

pub use scene::{Billboard, Scene};

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
