//! Chess board view - draws the board and feeds pointer/keyboard input to the model.

use gpui::{
    Context, Entity, FocusHandle, KeyDownEvent, KeyUpEvent, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, Subscription, Window, canvas, div, prelude::*, rgb,
};

use crate::config::BoardConfig;
use crate::models::BoardModel;
use crate::ui::atlas::PieceAtlas;
use crate::ui::components::{render_highlight, render_piece, render_tile};
use crate::ui::display::board_scene;

/// The board view that observes a BoardModel
pub struct ChessBoardView {
    model: Entity<BoardModel>,
    atlas: PieceAtlas,
    config: BoardConfig,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(
        model: Entity<BoardModel>,
        atlas: PieceAtlas,
        config: BoardConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            model,
            atlas,
            config,
            focus_handle,
            _subscription,
        }
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_move = self.model.clone();
        let model_up = self.model.clone();
        let model_exit = self.model.clone();
        let model_key_down = self.model.clone();
        let model_key_up = self.model.clone();
        let model_measure = self.model.clone();
        let focus_on_click = self.focus_handle.clone();
        let flip_key = self.config.flip_key.clone();
        let flip_key_up = flip_key.clone();

        let scene = board_scene(self.model.read(cx));
        let square_size = scene.square_size;
        let piece_size = scene.piece_size;
        let config = &self.config;

        let tiles = scene
            .tiles
            .iter()
            .map(|tile| render_tile(*tile, square_size, config.light_square, config.dark_square));
        let highlights = scene
            .highlights
            .iter()
            .map(|h| render_highlight(*h, square_size, config.highlight));
        let pieces = scene
            .pieces
            .iter()
            .map(|p| render_piece(*p, self.atlas.get(p.piece), piece_size));
        let held = scene
            .held
            .map(|p| render_piece(p, self.atlas.get(p.piece), piece_size));

        let surface = div()
            .id("board-surface")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(config.background))
            .children(tiles)
            .children(highlights)
            .children(pieces)
            .when_some(held, |el, held| el.child(held))
            // Mouse down: pick up a piece
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, window, cx| {
                    window.focus(&focus_on_click);
                    model_down.update(cx, |board, cx| {
                        if board.pointer_down(ev.position) {
                            cx.notify();
                        }
                    });
                },
            )
            // Mouse move: update drag position
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |board, cx| {
                    if board.pointer_move(ev.position) {
                        cx.notify();
                    }
                });
            })
            // Mouse up: drop the held piece
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |board, cx| {
                    if board.pointer_up(ev.position) {
                        cx.notify();
                    }
                });
            })
            // Pointer leaving the surface aborts a drag
            .on_hover(move |hovered: &bool, _window, cx| {
                if *hovered {
                    return;
                }
                model_exit.update(cx, |board, cx| {
                    if board.pointer_exit() {
                        cx.notify();
                    }
                });
            })
            .on_key_down(move |ev: &KeyDownEvent, _window, cx| {
                if ev.keystroke.key != flip_key {
                    return;
                }
                model_key_down.update(cx, |board, cx| {
                    if board.flip_key_down() {
                        cx.notify();
                    }
                });
            })
            .on_key_up(move |ev: &KeyUpEvent, _window, cx| {
                if ev.keystroke.key != flip_key_up {
                    return;
                }
                model_key_up.update(cx, |board, _| board.flip_key_up());
            });

        // Canvas to measure actual surface bounds
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |board, cx| {
                    if board.surface != bounds {
                        board.surface = bounds;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(surface)
    }
}
