//! Render pass for animated entities.
//!
//! Drawing happens inside raylib's 2D drawing scope, which the host
//! application opens and passes in; the engine never reaches for a global
//! drawing context.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::flip::Flip;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::resources::animationstore::TextureAnimations;

/// Draw the current frame of every animated entity.
///
/// One draw per entity: the frame cached on its
/// [`Animation`](crate::components::animation::Animation) cursor, placed at
/// the entity's map position with origin (0,0), no rotation, white tint and
/// no layering. [`Scale`] and [`Flip`] are optional per-entity modifiers;
/// mirroring is expressed through negative source-rectangle extents.
///
/// Entities whose key is unregistered or whose frame index cannot be
/// resolved are skipped and reported, never drawn wrongly.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let to_draw: Vec<(Animation, MapPosition, Scale, Flip)> = {
        let mut query =
            world.query::<(&Animation, &MapPosition, Option<&Scale>, Option<&Flip>)>();
        query
            .iter(world)
            .map(|(cursor, position, scale, flip)| {
                (
                    cursor.clone(),
                    *position,
                    scale.copied().unwrap_or_default(),
                    flip.copied().unwrap_or_default(),
                )
            })
            .collect()
    };

    let store = world.resource::<TextureAnimations>();
    for (cursor, position, scale, flip) in to_draw.iter() {
        let frame = store
            .get(&cursor.animation_key)
            .and_then(|definition| definition.frame(cursor.frame_index));
        let tex = match frame {
            Ok(tex) => tex,
            Err(e) => {
                warn!("skipping draw for '{}': {e}", cursor.animation_key);
                continue;
            }
        };

        let width = tex.width as f32;
        let height = tex.height as f32;
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: if flip.horizontal { -width } else { width },
            height: if flip.vertical { -height } else { height },
        };
        let dest = Rectangle {
            x: position.x,
            y: position.y,
            width: width * scale.scale.x,
            height: height * scale.scale.y,
        };

        d2.draw_texture_pro(
            tex,
            src,
            dest,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}
