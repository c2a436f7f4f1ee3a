mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;

use crate::error::Result;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};

pub struct Display {
    sdl_context: Sdl,
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

/// Streaming texture the pixel buffer is uploaded into every frame
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

/// Modifier keys held when a mouse button went down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    fn from_mod(keymod: Mod) -> Self {
        Self {
            ctrl: keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
            shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    /// Position is in window coordinates, not raster pixels
    MouseDown {
        x: i32,
        y: i32,
        button: MouseButtonKind,
        modifiers: Modifiers,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonKind {
    Left,
    Right,
    Middle,
}

impl Display {
    /// Create a resizable window showing a `width` x `height` raster.
    /// vsync=true: present is paced by the monitor refresh
    /// vsync=false: uncapped framerate
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                sdl_context,
                canvas,
                event_pump,
            },
            texture_creator,
        ))
    }

    /// Current displayed size of the window, which may differ from the raster
    pub fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    /// Upload the buffer and show it, stretched to fill the window
    pub fn present(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<()> {
        target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        // Modifier state as of the last event already pumped; the queue
        // below carries every change made since then
        let initial = Modifiers::from_mod(self.sdl_context.keyboard().mod_state());
        let raw: Vec<RawEvent> = self.event_pump.poll_iter().filter_map(raw_event).collect();
        translate_events(initial, raw)
    }
}

/// SDL event reduced to the parts the explorer reacts to
#[derive(Debug, Clone, Copy)]
enum RawEvent {
    Quit,
    Key {
        keycode: Option<Keycode>,
        keymod: Mod,
        pressed: bool,
    },
    MouseDown {
        x: i32,
        y: i32,
        button: MouseButtonKind,
    },
}

fn raw_event(event: Event) -> Option<RawEvent> {
    match event {
        Event::Quit { .. } => Some(RawEvent::Quit),
        Event::KeyDown {
            keycode, keymod, ..
        } => Some(RawEvent::Key {
            keycode,
            keymod,
            pressed: true,
        }),
        Event::KeyUp {
            keycode, keymod, ..
        } => Some(RawEvent::Key {
            keycode,
            keymod,
            pressed: false,
        }),
        Event::MouseButtonDown {
            x, y, mouse_btn, ..
        } => map_mouse_button(mouse_btn).map(|button| RawEvent::MouseDown { x, y, button }),
        _ => None,
    }
}

/// Replay queued events in order, tagging each click with the modifiers
/// held at that point in the queue.
fn translate_events(
    initial: Modifiers,
    raw: impl IntoIterator<Item = RawEvent>,
) -> Vec<InputEvent> {
    let mut modifiers = initial;
    let mut events = Vec::new();

    for event in raw {
        match event {
            RawEvent::Quit => events.push(InputEvent::Quit),
            RawEvent::Key {
                keycode,
                keymod,
                pressed,
            } => {
                // keymod already includes the key this event reports
                modifiers = Modifiers::from_mod(keymod);
                if let (true, Some(k)) = (pressed, keycode) {
                    events.push(InputEvent::KeyDown(k));
                }
            },
            RawEvent::MouseDown { x, y, button } => events.push(InputEvent::MouseDown {
                x,
                y,
                button,
                modifiers,
            }),
        }
    }

    events
}

impl<'a> RenderTarget<'a> {
    /// Create a streaming texture matching the raster size.
    /// ABGR8888 is laid out R,G,B,A in memory on little-endian targets,
    /// which is the pixel buffer's byte order.
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}

fn map_mouse_button(btn: MouseButton) -> Option<MouseButtonKind> {
    match btn {
        MouseButton::Left => Some(MouseButtonKind::Left),
        MouseButton::Right => Some(MouseButtonKind::Right),
        MouseButton::Middle => Some(MouseButtonKind::Middle),
        _ => None,
    }
}
