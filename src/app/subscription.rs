// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw pointer, touch, and keyboard events only matter on the showcase
//! screen; other screens get no event subscription at all. Presses that
//! a widget already captured (a button click) are not forwarded, so a
//! click can never start a swipe. Releases are forwarded unconditionally
//! so an in-flight gesture always terminates, even when the pointer ends
//! up over a widget.

use super::{Message, Screen};
use crate::ui::showcase;
use iced::{event, keyboard, mouse, touch, window, Subscription};

pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Showcase => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(window::Event::Resized(_)) = &event {
                return Some(Message::Showcase(showcase::Message::LayoutChanged));
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = &event
            {
                if status == event::Status::Ignored && modifiers.control() {
                    return match key {
                        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                            Some(Message::Showcase(showcase::Message::DeckNext))
                        }
                        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                            Some(Message::Showcase(showcase::Message::DeckPrevious))
                        }
                        _ => None,
                    };
                }
                return None;
            }

            match event {
                event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    Some(Message::Showcase(showcase::Message::PointerMoved(position)))
                }
                event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    match status {
                        event::Status::Ignored => {
                            Some(Message::Showcase(showcase::Message::PointerPressed))
                        }
                        event::Status::Captured => None,
                    }
                }
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    Some(Message::Showcase(showcase::Message::PointerReleased))
                }
                event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                    match status {
                        event::Status::Ignored => {
                            Some(Message::Showcase(showcase::Message::TouchStarted(position)))
                        }
                        event::Status::Captured => None,
                    }
                }
                event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                    Some(Message::Showcase(showcase::Message::PointerMoved(position)))
                }
                event::Event::Touch(
                    touch::Event::FingerLifted { position, .. }
                    | touch::Event::FingerLost { position, .. },
                ) => Some(Message::Showcase(showcase::Message::TouchEnded(position))),
                _ => None,
            }
        }),
        Screen::About => Subscription::none(),
    }
}
