mod client_message_handler;
mod configure_request_handler;
mod display_event_handler;
mod focus_handler;
mod screen_create_handler;
mod window_handler;
