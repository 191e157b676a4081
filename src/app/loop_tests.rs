use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::catalog::{CatalogSource, DemoCatalog, MockCatalogSource};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockCatalogSource::new();
    mock.expect_load().returning(|| DemoCatalog.load());

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(Command::LoadCatalog, source, tx).unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::CatalogLoaded(catalog) = action {
        assert_eq!(catalog.items.len(), 14);
    } else {
        panic!("Expected Action::CatalogLoaded, got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockCatalogSource::new();
    mock.expect_load()
        .returning(|| Err(anyhow::anyhow!("catalog unavailable")));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(Command::LoadCatalog, source, tx).unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::ErrorOccurred(message) = action {
        assert!(message.contains("catalog unavailable"));
    } else {
        panic!("Expected Action::ErrorOccurred, got {action:?}");
    }
}

#[tokio::test]
async fn test_load_failure_lands_in_state() {
    let mut mock = MockCatalogSource::new();
    mock.expect_load().returning(|| Err(anyhow::anyhow!("boom")));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();

    handle_command(Command::LoadCatalog, source, tx).unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);
    assert!(state.last_error.as_deref().unwrap().contains("boom"));
    assert!(state.catalog.is_none());
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn backend_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_scripted_search_session() {
    let mut mock = MockCatalogSource::new();
    mock.expect_load().returning(|| DemoCatalog.load());
    let source = Arc::new(mock);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);
    let feeder = tokio::spawn(async move {
        let mut events = vec![key_event(KeyCode::Char('/'))];
        for c in "design".chars() {
            events.push(key_event(KeyCode::Char(c)));
        }
        events.push(key_event(KeyCode::Enter));
        events.push(key_event(KeyCode::Char('q')));
        for event in events {
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
        }
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, app_state, source, event_rx),
    )
    .await;
    result.expect("loop should terminate").unwrap();
    feeder.await.unwrap();

    // The last frame drawn before quitting shows the committed results page.
    let text = backend_text(&terminal);
    assert!(text.contains("QUERY: design"), "footer badge missing:\n{text}");
    assert!(text.contains("SEARCH RESULTS"), "results page missing:\n{text}");
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockCatalogSource::new();
    mock.expect_load().returning(|| DemoCatalog.load());
    let source = Arc::new(mock);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Feed random events; the loop must survive all of them.
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
            ))))
            .await;
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, source, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
