//! Top-left minimap: one frame pixel per map cell.

use crate::{
    renderer::{Frame, Rgba},
    world::{MapLegend, Pose, Scene},
};

pub const PLAYER_COLOUR: Rgba = 0xFF_FF0000;
pub const HEADING_COLOUR: Rgba = 0xFF_00FF00;

/// Draw the map, the player in red and the point one unit ahead in green.
///
/// The authored map image is copied as-is when the scene carries one;
/// otherwise every cell is painted in its legend colour.  Anything past the
/// frame edge is clipped.
pub fn draw_minimap(frame: &mut Frame, scene: &Scene, pose: &Pose, legend: &MapLegend) {
    match &scene.map_image {
        Some(img) => {
            for y in 0..img.h.min(frame.height) {
                for x in 0..img.w.min(frame.width) {
                    frame.put(x as i32, y as i32, img.texel(x, y));
                }
            }
        }
        None => {
            let map = &scene.map;
            for y in 0..map.height().min(frame.height) {
                for x in 0..map.width().min(frame.width) {
                    frame.put(x as i32, y as i32, legend.colour_of(map.classify(x, y)));
                }
            }
        }
    }

    let at = pose.pos.floor().as_ivec2();
    frame.put(at.x, at.y, PLAYER_COLOUR);
    let ahead = (pose.pos + pose.forward()).floor().as_ivec2();
    frame.put(ahead.x, ahead.y, HEADING_COLOUR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{GridMap, Texture};
    use glam::vec2;

    fn scene(rows: &[&str]) -> Scene {
        Scene::new(GridMap::from_ascii(rows).unwrap(), 0, 0)
    }

    #[test]
    fn map_player_and_heading() {
        let legend = MapLegend::default();
        let scene = scene(&["###", "#.#", "#.#", "###"]);
        let mut f = Frame::new(10, 10);
        draw_minimap(&mut f, &scene, &Pose::new(vec2(1.5, 2.5), 0.0), &legend);

        assert_eq!(f.get(0, 0), Some(legend.wall));
        assert_eq!(f.get(1, 2), Some(PLAYER_COLOUR));
        assert_eq!(f.get(1, 1), Some(HEADING_COLOUR));
        // untouched outside the map
        assert_eq!(f.get(5, 5), Some(0));
    }

    #[test]
    fn source_image_shown_verbatim() {
        let legend = MapLegend::default();
        // off-legend colour classifies as empty but still shows as authored
        let odd = 0xFF_ABCDEF;
        let img = Texture::new(2, 1, vec![legend.wall, odd]).unwrap();
        let scene = Scene::new(GridMap::from_texture(&img, &legend), 0, 0).with_map_image(img);
        let mut f = Frame::new(4, 4);
        draw_minimap(&mut f, &scene, &Pose::new(vec2(0.5, 3.5), 0.0), &legend);

        assert_eq!(f.get(0, 0), Some(legend.wall));
        assert_eq!(f.get(1, 0), Some(odd));
        assert_ne!(f.get(1, 0), Some(legend.empty));
    }

    #[test]
    fn clipped_to_small_frames() {
        let scene = scene(&["....", "....", "....", "...."]);
        let mut f = Frame::new(2, 2);
        draw_minimap(&mut f, &scene, &Pose::new(vec2(3.5, 3.5), 0.0), &MapLegend::default());
        assert!(f.pixels.iter().all(|&c| c == MapLegend::default().empty));
    }
}
