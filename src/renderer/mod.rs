//! Rendering module
//!
//! The simulation never touches a canvas. Each frame it produces a list of
//! `DrawCommand`s, in back-to-front order, that any backend can replay.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::Serialize;

use crate::config::GameConfig;
use crate::sim::{AvatarId, RoundPhase, RoundState};
pub use vertex::{Vertex, colors};

/// How a text anchor is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// Centred on both axes
    Center,
    /// Centred horizontally, anchor on the baseline
    CenterBaseline,
}

/// A single drawing request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        color: [f32; 4],
    },
    /// Avatar image centred on `pos`
    Sprite {
        avatar: AvatarId,
        pos: Vec2,
        rotation: f32,
        size: f32,
    },
    Heart {
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
    Text {
        text: &'static str,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
        align: TextAlign,
    },
}

/// Build the draw list for the current state
///
/// Order is background, avatars, hearts, then text.
pub fn build_frame(state: &RoundState, config: &GameConfig) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear {
        color: colors::BACKGROUND,
    }];
    let cx = config.width / 2.0;
    let cy = config.height / 2.0;

    let text = |text, x, y, size, color| DrawCommand::Text {
        text,
        pos: Vec2::new(x, y),
        size,
        color,
        align: TextAlign::Center,
    };

    match state.phase {
        RoundPhase::NotStarted => {
            commands.extend([
                text("Press 2P START", cx, cy - 20.0, 16.0, colors::TEXT),
                text("P1 (Red): DPAD to move", cx, cy + 10.0, 10.0, colors::TEXT),
                text("P2 (Green): DPAD to move", cx, cy + 25.0, 10.0, colors::TEXT),
                text(
                    "P1 A rotates Green, P2 A rotates Red",
                    cx,
                    cy + 40.0,
                    10.0,
                    colors::TEXT,
                ),
                text("Touch each other to win!", cx, cy + 60.0, 9.0, colors::TEXT),
            ]);
        }

        RoundPhase::Playing => {
            push_avatars(&mut commands, state);
            for id in AvatarId::ALL {
                let avatar = state.avatar(id);
                commands.push(DrawCommand::Text {
                    text: id.label(),
                    pos: avatar.pos - Vec2::new(0.0, avatar.half_size() + 5.0),
                    size: 8.0,
                    color: colors::LABEL,
                    align: TextAlign::CenterBaseline,
                });
            }
        }

        RoundPhase::Won => {
            push_avatars(&mut commands, state);
            for heart in &state.hearts {
                let mut color = colors::HEART;
                color[3] = (heart.alpha / 255.0).clamp(0.0, 1.0);
                commands.push(DrawCommand::Heart {
                    pos: heart.pos,
                    size: heart.size,
                    color,
                });
            }
            commands.extend([
                text("LOVE WINS!", cx, cy - 50.0, 24.0, colors::HEART),
                text(
                    "Press START to play again",
                    cx,
                    config.height - 30.0,
                    12.0,
                    colors::TEXT,
                ),
            ]);
        }
    }

    commands
}

/// Flatten a draw list into triangles for a vertex-buffer backend
///
/// Sprites become flat quads in the avatar's colour; text and clears are
/// left to the backend.
pub fn tessellate(commands: &[DrawCommand], heart_segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match *command {
            DrawCommand::Sprite {
                avatar,
                pos,
                rotation,
                size,
            } => {
                let color = match avatar {
                    AvatarId::One => colors::AVATAR_ONE,
                    AvatarId::Two => colors::AVATAR_TWO,
                };
                vertices.extend(shapes::sprite(pos, size, rotation, color));
            }
            DrawCommand::Heart { pos, size, color } => {
                vertices.extend(shapes::heart(pos, size, color, heart_segments));
            }
            DrawCommand::Clear { .. } | DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

fn push_avatars(commands: &mut Vec<DrawCommand>, state: &RoundState) {
    commands.extend(state.avatars.iter().map(|avatar| DrawCommand::Sprite {
        avatar: avatar.id,
        pos: avatar.pos,
        rotation: avatar.rotation,
        size: avatar.size,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Heart;

    fn layer(command: &DrawCommand) -> u8 {
        match command {
            DrawCommand::Clear { .. } => 0,
            DrawCommand::Sprite { .. } => 1,
            DrawCommand::Heart { .. } => 2,
            DrawCommand::Text { .. } => 3,
        }
    }

    fn won_state(config: &GameConfig) -> RoundState {
        let mut state = RoundState::new(config);
        state.phase = RoundPhase::Won;
        state.hearts = (0..4)
            .map(|i| Heart {
                pos: Vec2::new(100.0 + i as f32, 100.0),
                size: 20.0,
                alpha: 255.0,
            })
            .collect();
        state
    }

    #[test]
    fn test_title_screen_has_no_sprites() {
        let config = GameConfig::default();
        let commands = build_frame(&RoundState::new(&config), &config);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(
            commands
                .iter()
                .all(|c| !matches!(c, DrawCommand::Sprite { .. } | DrawCommand::Heart { .. }))
        );
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text {
                text: "Press 2P START",
                ..
            }
        )));
    }

    #[test]
    fn test_playing_draws_avatars_then_labels() {
        let config = GameConfig::default();
        let mut state = RoundState::new(&config);
        state.phase = RoundPhase::Playing;
        state.avatars[1].rotation = 0.45;

        let commands = build_frame(&state, &config);
        assert_eq!(commands.len(), 5);
        assert_eq!(
            commands[2],
            DrawCommand::Sprite {
                avatar: AvatarId::Two,
                pos: Vec2::new(252.0, 131.0),
                rotation: 0.45,
                size: 50.0,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Text {
                text: "P1",
                pos: Vec2::new(84.0, 101.0),
                size: 8.0,
                color: colors::LABEL,
                align: TextAlign::CenterBaseline,
            }
        );
    }

    #[test]
    fn test_won_frame_is_z_ordered() {
        let config = GameConfig::default();
        let commands = build_frame(&won_state(&config), &config);

        let layers: Vec<u8> = commands.iter().map(layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(layers.iter().filter(|&&l| l == 2).count(), 4);
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text {
                text: "LOVE WINS!",
                ..
            }
        )));
    }

    #[test]
    fn test_heart_alpha_maps_to_color() {
        let config = GameConfig::default();
        let mut state = won_state(&config);
        state.hearts.truncate(1);
        state.hearts[0].alpha = 127.5;

        let commands = build_frame(&state, &config);
        let heart = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Heart { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap();
        assert!((heart[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tessellate_counts() {
        let config = GameConfig::default();
        let commands = build_frame(&won_state(&config), &config);
        // 2 sprites * 6 + 4 hearts * (2 * 8 segments * 3)
        assert_eq!(tessellate(&commands, 8).len(), 12 + 4 * 48);
    }

    #[test]
    fn test_commands_serialize_for_js() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&build_frame(&won_state(&config), &config)).unwrap();
        assert!(json.contains("\"Heart\""));
        assert!(json.contains("LOVE WINS!"));
    }
}
