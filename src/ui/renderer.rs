//! Preview rendering for the cube proxy
//!
//! Projects the 27-cell proxy into a 2D pixmap so the guidance animation is
//! observable without a real 3D pipeline. Layout calculation (rotate, scale,
//! project, cull, depth-sort) is separated from painting for testability;
//! only the painting half touches tiny-skia.

use glam::{EulerRot, Mat3, Vec3};
use tiny_skia::{Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::{DisplayPalette, Rgba};
use crate::domain::face::FaceId;
use crate::ui::proxy::{CubeProxy, face_normal};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Canvas size {0} is too small to render the proxy")]
    CanvasTooSmall(u32),

    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,
}

/// Edge length of one proxy cell; cells sit on a unit lattice
const CELL_SIZE: f32 = 0.95;
/// World-space radius the projection must fit, pulse headroom included
const FIT_RADIUS: f32 = 3.1;

/// One projected facet, ready to paint
#[derive(Debug, Clone)]
pub struct FacetQuad {
    /// Screen-space corners
    pub corners: [(f32, f32); 4],
    pub fill: Rgba,
    /// View-space depth of the facet center; larger is nearer
    pub depth: f32,
}

/// Pre-calculated projection of the proxy for one frame
///
/// Rotates every cell facet by the pose, applies the uniform pulse scale,
/// orthographically projects onto the canvas, culls the facets looking away
/// from the viewer, and depth-sorts the survivors back to front.
#[derive(Debug, Clone)]
pub struct ProxyLayout {
    pub quads: Vec<FacetQuad>,
    pub canvas_size: u32,
    pub outline: Rgba,
}

impl ProxyLayout {
    /// Projects `proxy` under the given pose and scale
    ///
    /// # Arguments
    /// * `pose` - per-axis rotation from the rotation track
    /// * `scale` - uniform scale from the pulse track
    /// * `canvas_size` - square canvas edge in pixels
    pub fn project(
        proxy: &CubeProxy,
        pose: Vec3,
        scale: f32,
        canvas_size: u32,
        palette: &DisplayPalette,
    ) -> Self {
        let rotation = Mat3::from_euler(EulerRot::XYZ, pose.x, pose.y, pose.z);
        let half = canvas_size as f32 / 2.0;
        let pixels_per_unit = half / FIT_RADIUS;

        let mut quads = Vec::new();
        for cell in proxy.cells() {
            let center = cell.position.as_vec3();
            for face in FaceId::STORE_ORDER {
                // Only exterior facets exist on the cube surface
                if cell.position.dot(face_normal(face)) != 1 {
                    continue;
                }
                let normal = face_normal(face).as_vec3();
                let view_normal = rotation * normal;
                // Viewer sits on +z; skip facets looking away or edge-on
                if view_normal.z <= 1e-4 {
                    continue;
                }

                let fill = match cell.facet(face) {
                    Some(color) => palette.color_of(color),
                    None => palette.placeholder(),
                };

                let (u, v) = tangents(normal);
                let facet_center = center + normal * (CELL_SIZE / 2.0);
                let mut corners = [(0.0, 0.0); 4];
                let mut depth = 0.0;
                let offsets = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
                for (slot, (du, dv)) in offsets.into_iter().enumerate() {
                    let world = facet_center + u * (du * CELL_SIZE) + v * (dv * CELL_SIZE);
                    let viewed = rotation * world * scale;
                    corners[slot] = (
                        half + viewed.x * pixels_per_unit,
                        half - viewed.y * pixels_per_unit,
                    );
                    depth += viewed.z;
                }

                quads.push(FacetQuad {
                    corners,
                    fill,
                    depth: depth / 4.0,
                });
            }
        }

        // Painter's algorithm: far facets first
        quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        Self {
            quads,
            canvas_size,
            outline: palette.outline(),
        }
    }
}

/// Two axes spanning the facet plane for a given facet normal
fn tangents(normal: Vec3) -> (Vec3, Vec3) {
    if normal.x.abs() > 0.5 {
        (Vec3::Y, Vec3::Z)
    } else if normal.y.abs() > 0.5 {
        (Vec3::X, Vec3::Z)
    } else {
        (Vec3::X, Vec3::Y)
    }
}

fn skia_color(rgba: Rgba) -> SkiaColor {
    SkiaColor::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Paints projected layouts into pixmaps
#[derive(Debug, Default)]
pub struct ProxyRenderer;

impl ProxyRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a layout to a fresh pixmap
    pub fn render(&self, layout: &ProxyLayout) -> Result<Pixmap, RendererError> {
        if layout.canvas_size < 16 {
            return Err(RendererError::CanvasTooSmall(layout.canvas_size));
        }

        let mut pixmap = Pixmap::new(layout.canvas_size, layout.canvas_size)
            .ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(SkiaColor::TRANSPARENT);

        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        let mut outline_paint = Paint::default();
        outline_paint.set_color(skia_color(layout.outline));
        outline_paint.anti_alias = true;

        for quad in &layout.quads {
            let mut builder = PathBuilder::new();
            builder.move_to(quad.corners[0].0, quad.corners[0].1);
            for corner in &quad.corners[1..] {
                builder.line_to(corner.0, corner.1);
            }
            builder.close();

            let Some(path) = builder.finish() else {
                continue;
            };

            let mut fill_paint = Paint::default();
            fill_paint.set_color(skia_color(quad.fill));
            fill_paint.anti_alias = true;

            pixmap.fill_path(
                &path,
                &fill_paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
            pixmap.stroke_path(&path, &outline_paint, &stroke, Transform::identity(), None);
        }

        Ok(pixmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::face::FaceReading;

    fn rest_layout(proxy: &CubeProxy, canvas: u32) -> ProxyLayout {
        ProxyLayout::project(proxy, Vec3::ZERO, 1.0, canvas, &DisplayPalette::default())
    }

    #[test]
    fn rest_pose_shows_exactly_the_front_facets() {
        let proxy = CubeProxy::new();
        let layout = rest_layout(&proxy, 256);

        // Only the nine +z facets face the viewer; the rest are culled
        assert_eq!(layout.quads.len(), 9);
    }

    #[test]
    fn right_pose_shows_the_right_facets() {
        let mut proxy = CubeProxy::new();
        proxy.apply_reading(FaceId::Right, &FaceReading::solid(FaceId::Right.color()));

        let palette = DisplayPalette::default();
        let layout =
            ProxyLayout::project(&proxy, FaceId::Right.guidance_pose(), 1.0, 256, &palette);

        assert_eq!(layout.quads.len(), 9);
        let red = palette.color_of(FaceId::Right.color());
        assert!(layout.quads.iter().all(|quad| quad.fill == red));
    }

    #[test]
    fn tilted_pose_shows_three_faces() {
        let proxy = CubeProxy::new();
        let layout = ProxyLayout::project(
            &proxy,
            Vec3::new(0.6, 0.6, 0.0),
            1.0,
            256,
            &DisplayPalette::default(),
        );

        // Three of the six cube sides are visible from a corner-ish view
        assert_eq!(layout.quads.len(), 27);
    }

    #[test]
    fn quads_are_depth_sorted_far_to_near() {
        let proxy = CubeProxy::new();
        let layout = ProxyLayout::project(
            &proxy,
            Vec3::new(0.6, 0.6, 0.0),
            1.0,
            256,
            &DisplayPalette::default(),
        );

        for pair in layout.quads.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn render_produces_requested_dimensions() {
        let mut proxy = CubeProxy::new();
        proxy.fill_centers();

        let pixmap = ProxyRenderer::new()
            .render(&rest_layout(&proxy, 200))
            .unwrap();
        assert_eq!(pixmap.width(), 200);
        assert_eq!(pixmap.height(), 200);
    }

    #[test]
    fn skeleton_renders_nontransparent_center() {
        let mut proxy = CubeProxy::new();
        proxy.fill_centers();

        let pixmap = ProxyRenderer::new()
            .render(&rest_layout(&proxy, 200))
            .unwrap();
        let center = pixmap.pixel(100, 100).unwrap();
        assert!(center.alpha() > 0, "center pixel should be painted");
    }

    #[test]
    fn tiny_canvas_is_rejected() {
        let proxy = CubeProxy::new();
        let result = ProxyRenderer::new().render(&rest_layout(&proxy, 8));
        assert!(matches!(result, Err(RendererError::CanvasTooSmall(8))));
    }
}
