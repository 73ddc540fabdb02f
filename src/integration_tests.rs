//! Integration tests for agritech-client
//!
//! These tests exercise full workflows across multiple modules: the app
//! opening dialogs through the coordinator, submit helpers running the
//! callbacks, and the resulting backend requests and state changes.

#[cfg(test)]
mod integration_tests {
    use crate::app::AgriApp;
    use crate::config::Settings;
    use crate::dialog_coordinator::{DialogMode, EntityKind};
    use crate::protocol::{
        Author, BackendAction, ChatMessage, ChatSummary, FileRef, GuiEvent, Session,
    };
    use crate::ui::dialogs::{confirm, submit_edit, submit_file_select};
    use crossbeam_channel::{unbounded, Receiver, Sender};
    use eframe::egui;

    fn headless_app() -> (AgriApp, Receiver<BackendAction>, Sender<GuiEvent>) {
        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let app = AgriApp::from_parts(Settings::default(), action_tx, event_rx);
        (app, action_rx, event_tx)
    }

    fn chat(id: &str, title: &str) -> ChatSummary {
        ChatSummary {
            id: id.into(),
            title: title.into(),
            updated_at: None,
        }
    }

    fn file(id: &str, name: &str) -> FileRef {
        FileRef {
            id: id.into(),
            name: name.into(),
            url: Some(format!("https://files.example/{}", id)),
            size: Some(2048),
            uploaded_at: None,
        }
    }

    fn drain(rx: &Receiver<BackendAction>) -> Vec<BackendAction> {
        rx.try_iter().collect()
    }

    fn logged_in_app() -> (AgriApp, Receiver<BackendAction>, Sender<GuiEvent>) {
        let (mut app, action_rx, event_tx) = headless_app();
        event_tx
            .send(GuiEvent::LoggedIn(Session {
                token: "t0k".into(),
                email: "farmer@example.com".into(),
                user_id: Some("u1".into()),
            }))
            .unwrap();
        event_tx
            .send(GuiEvent::Chats(vec![chat("c1", "Wheat"), chat("c2", "Barley")]))
            .unwrap();
        event_tx
            .send(GuiEvent::Files(vec![file("f1", "soil.csv"), file("f2", "yield.xlsx")]))
            .unwrap();
        app.process_events();
        drain(&action_rx);
        (app, action_rx, event_tx)
    }

    /// Login triggers the initial data loads and remembers the address
    #[test]
    fn test_login_fetches_initial_data() {
        let (mut app, action_rx, event_tx) = headless_app();
        event_tx
            .send(GuiEvent::LoggedIn(Session {
                token: "t0k".into(),
                email: "farmer@example.com".into(),
                user_id: None,
            }))
            .unwrap();
        app.process_events();

        assert!(app.state.is_logged_in());
        assert_eq!(app.settings.last_email, "farmer@example.com");
        let sent = drain(&action_rx);
        assert!(sent.iter().any(|a| matches!(a, BackendAction::FetchProfile)));
        assert!(sent.iter().any(|a| matches!(a, BackendAction::FetchChats)));
        assert!(sent.iter().any(|a| matches!(a, BackendAction::FetchFiles)));
    }

    /// New chat dialog: submit runs the callback, which queues CreateChat
    #[test]
    fn test_new_chat_dialog_creates_chat() {
        let (mut app, action_rx, _event_tx) = logged_in_app();

        app.open_new_chat_dialog();
        let state = app.dialogs.item_dialog();
        assert!(state.is_open);
        assert_eq!(state.request.kind, EntityKind::Chat);
        assert_eq!(state.request.mode, DialogMode::Create);

        submit_edit(&mut app.dialogs, "  Irrigation plan ").unwrap();
        assert!(!app.dialogs.item_dialog().is_open);

        app.drain_commands();
        let sent = drain(&action_rx);
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            BackendAction::CreateChat { title } => assert_eq!(title, "Irrigation plan"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    /// An invalid title keeps the dialog open and sends nothing
    #[test]
    fn test_invalid_title_keeps_dialog_open() {
        let (mut app, action_rx, _event_tx) = logged_in_app();

        app.open_rename_chat_dialog("c1");
        assert_eq!(app.dialogs.item_dialog().request.initial_value, "Wheat");

        assert!(submit_edit(&mut app.dialogs, "   ").is_err());
        assert!(app.dialogs.item_dialog().is_open);
        assert!(app.dialogs.item_dialog().request.has_edit_callback());

        submit_edit(&mut app.dialogs, "Winter wheat").unwrap();
        app.drain_commands();
        match drain(&action_rx).as_slice() {
            [BackendAction::RenameChat { id, title }] => {
                assert_eq!(id, "c1");
                assert_eq!(title, "Winter wheat");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    /// Delete goes through the confirm dialog; cancelling sends nothing
    #[test]
    fn test_delete_chat_requires_confirmation() {
        let (mut app, action_rx, event_tx) = logged_in_app();

        app.request_delete_chat("c2");
        assert!(app.dialogs.confirm_dialog().is_open);
        assert!(app.dialogs.confirm_dialog().request.message.contains("Barley"));

        // Cancel
        app.dialogs.close_confirm_dialog();
        app.drain_commands();
        assert!(drain(&action_rx).is_empty());

        // Confirm
        app.request_delete_chat("c2");
        confirm(&mut app.dialogs);
        assert!(!app.dialogs.confirm_dialog().is_open);
        app.drain_commands();
        match drain(&action_rx).as_slice() {
            [BackendAction::DeleteChat(id)] => assert_eq!(id, "c2"),
            other => panic!("unexpected actions: {:?}", other),
        }

        event_tx.send(GuiEvent::ChatDeleted("c2".into())).unwrap();
        app.process_events();
        assert!(app.state.chat_title("c2").is_none());
    }

    /// A replaced confirmation never fires
    #[test]
    fn test_replaced_confirmation_is_discarded() {
        let (mut app, action_rx, _event_tx) = logged_in_app();

        app.request_delete_chat("c1");
        app.request_delete_file("f1");
        confirm(&mut app.dialogs);
        app.drain_commands();

        match drain(&action_rx).as_slice() {
            [BackendAction::DeleteFile(id)] => assert_eq!(id, "f1"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    /// File picker selection lands in the coordinator after the drain
    #[test]
    fn test_file_picker_selects_file() {
        let (mut app, action_rx, _event_tx) = logged_in_app();

        app.open_file_picker();
        assert_eq!(app.dialogs.item_dialog().request.kind, EntityKind::File);
        assert!(app.dialogs.item_dialog().request.has_file_select_callback());

        let picked = app.state.file("f2").cloned().unwrap();
        submit_file_select(&mut app.dialogs, picked);
        assert!(!app.dialogs.item_dialog().is_open);
        assert!(app.dialogs.selected_file().is_none());

        app.drain_commands();
        assert_eq!(app.dialogs.selected_file().map(|f| f.id.as_str()), Some("f2"));
        assert!(drain(&action_rx).is_empty());

        // Re-opening the picker carries the current selection
        app.open_file_picker();
        assert_eq!(
            app.dialogs
                .item_dialog()
                .request
                .selected_file
                .as_ref()
                .map(|f| f.id.as_str()),
            Some("f2")
        );
    }

    /// Preview carries the file and its content URL; no callbacks
    #[test]
    fn test_file_preview_request() {
        let (mut app, _action_rx, _event_tx) = logged_in_app();

        app.open_file_preview("f1");
        let request = &app.dialogs.item_dialog().request;
        assert_eq!(request.mode, DialogMode::Preview);
        assert_eq!(request.item_id.as_deref(), Some("f1"));
        assert_eq!(
            request.content_url.as_deref(),
            Some("https://files.example/f1")
        );
        assert!(!request.has_edit_callback());
        assert!(!request.has_file_select_callback());

        // Unknown files open nothing new
        app.dialogs.close_item_dialog();
        app.open_file_preview("missing");
        assert!(!app.dialogs.item_dialog().is_open);
    }

    /// Selection follows renames and is cleared on delete
    #[test]
    fn test_selection_tracks_file_events() {
        let (mut app, _action_rx, event_tx) = logged_in_app();
        app.dialogs.select_file(file("f1", "soil.csv"));

        event_tx
            .send(GuiEvent::FileRenamed(file("f1", "soil-2024.csv")))
            .unwrap();
        app.process_events();
        assert_eq!(
            app.dialogs.selected_file().map(|f| f.name.as_str()),
            Some("soil-2024.csv")
        );

        event_tx.send(GuiEvent::FileDeleted("f1".into())).unwrap();
        app.process_events();
        assert!(app.dialogs.selected_file().is_none());
        assert!(app.state.file("f1").is_none());
    }

    /// Chat picker switches the active chat and fetches its history
    #[test]
    fn test_chat_picker_opens_chat() {
        let (mut app, action_rx, event_tx) = logged_in_app();
        event_tx
            .send(GuiEvent::Messages {
                chat_id: "c1".into(),
                messages: vec![],
            })
            .unwrap();
        app.process_events();

        app.open_chat_picker();
        submit_edit(&mut app.dialogs, "c2").unwrap();
        app.drain_commands();

        assert_eq!(app.state.active_chat.as_deref(), Some("c2"));
        match drain(&action_rx).as_slice() {
            [BackendAction::FetchMessages(id)] => assert_eq!(id, "c2"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    /// Composer text becomes SendMessage; slash commands open dialogs
    #[test]
    fn test_composer_send_and_commands() {
        let (mut app, action_rx, event_tx) = logged_in_app();
        event_tx
            .send(GuiEvent::Messages {
                chat_id: "c1".into(),
                messages: vec![ChatMessage {
                    id: "m1".into(),
                    author: Author::User,
                    text: "Aphids on the beans".into(),
                    created_at: None,
                }],
            })
            .unwrap();
        app.process_events();
        drain(&action_rx);

        app.input.message_input = "How much water per hectare?".into();
        app.submit_input();
        match drain(&action_rx).as_slice() {
            [BackendAction::SendMessage { chat_id, text }] => {
                assert_eq!(chat_id, "c1");
                assert_eq!(text, "How much water per hectare?");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
        assert!(app.input.message_input.is_empty());

        app.input.message_input = "/analyze".into();
        app.submit_input();
        match drain(&action_rx).as_slice() {
            [BackendAction::AnalyzeMessage { text, .. }] => {
                assert_eq!(text, "Aphids on the beans")
            }
            other => panic!("unexpected actions: {:?}", other),
        }

        app.input.message_input = "/upload".into();
        app.submit_input();
        assert!(app.dialogs.item_dialog().is_open);
        assert_eq!(app.dialogs.item_dialog().request.kind, EntityKind::File);
        assert_eq!(app.dialogs.item_dialog().request.mode, DialogMode::Create);
    }

    /// Logout closes every dialog and forgets the selection
    #[test]
    fn test_logout_resets_dialogs() {
        let (mut app, action_rx, event_tx) = logged_in_app();
        app.dialogs.select_file(file("f1", "soil.csv"));
        app.open_rename_file_dialog("f2");

        app.request_logout();
        confirm(&mut app.dialogs);
        app.drain_commands();
        assert!(matches!(
            drain(&action_rx).as_slice(),
            [BackendAction::Logout]
        ));

        event_tx.send(GuiEvent::LoggedOut).unwrap();
        app.process_events();
        assert!(!app.state.is_logged_in());
        assert!(!app.dialogs.any_open());
        assert!(app.dialogs.selected_file().is_none());
        assert_eq!(app.login_form.email, "farmer@example.com");
    }

    /// Upload path validation happens before the callback runs
    #[test]
    fn test_upload_dialog_validates_path() {
        let (mut app, action_rx, _event_tx) = logged_in_app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field-map.png");
        std::fs::write(&path, b"png").unwrap();

        app.open_upload_dialog();
        assert!(submit_edit(&mut app.dialogs, "/definitely/not/here.png").is_err());
        assert!(app.dialogs.item_dialog().is_open);

        let path_str = path.to_string_lossy().to_string();
        submit_edit(&mut app.dialogs, &path_str).unwrap();
        app.drain_commands();
        match drain(&action_rx).as_slice() {
            [BackendAction::UploadFile { path }] => assert_eq!(path, &path_str),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    fn enter_press() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    fn render_item_dialog(app: &mut AgriApp, ctx: &egui::Context, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| {
            app.item_dialog_view
                .render(ctx, &mut app.dialogs, &app.state.chats, &app.state.files);
        });
        app.drain_commands();
    }

    /// The Enter that sent "/rename" must not also submit the dialog it opened
    #[test]
    fn test_slash_rename_dialog_survives_its_enter() {
        let (mut app, action_rx, _event_tx) = logged_in_app();
        let ctx = egui::Context::default();

        app.input.message_input = "/rename".into();
        app.submit_input();
        render_item_dialog(&mut app, &ctx, enter_press());

        assert!(app.dialogs.item_dialog().is_open);
        assert_eq!(app.item_dialog_view.input, "Wheat");
        assert!(drain(&action_rx).is_empty());

        app.item_dialog_view.input = "Durum wheat".into();
        render_item_dialog(&mut app, &ctx, enter_press());
        assert!(!app.dialogs.item_dialog().is_open);
        match drain(&action_rx).as_slice() {
            [BackendAction::RenameChat { id, title }] => {
                assert_eq!(id, "c1");
                assert_eq!(title, "Durum wheat");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    /// "/new" opens a clean dialog rather than one showing a validation error
    #[test]
    fn test_slash_new_dialog_opens_without_error() {
        let (mut app, action_rx, _event_tx) = logged_in_app();
        let ctx = egui::Context::default();

        app.input.message_input = "/new".into();
        app.submit_input();
        render_item_dialog(&mut app, &ctx, enter_press());

        assert!(app.dialogs.item_dialog().is_open);
        assert!(app.item_dialog_view.error.is_none());
        assert!(drain(&action_rx).is_empty());
    }
}
