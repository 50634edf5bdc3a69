mod common;

use kb_console::console::{execute, parse_command, run_loop};
use kb_console::page::ElementId;
use serde_json::json;

use common::{Recorder, happy_backend, state_for};

#[tokio::test]
async fn test_chat_shortcut_prints_answer() {
    let state = state_for(happy_backend(Recorder::default())).await;

    let out = execute(&state, parse_command("chat hello").unwrap()).await;
    assert_eq!(out.as_deref(), Some("#42:\n\nhi"));
    assert_eq!(state.page.read().await.value(ElementId::HistoryId), "42");
}

#[tokio::test]
async fn test_set_check_click_show_sequence() {
    let rec = Recorder::default();
    let state = state_for(happy_backend(rec.clone())).await;

    for line in [
        "set esQuery annual leave",
        "set esCategories hr,  policy",
        "set esTopN 2",
        "check esSave on",
        "click esSearchBtn",
    ] {
        assert_eq!(execute(&state, parse_command(line).unwrap()).await, None);
    }

    assert_eq!(
        rec.last().await.body,
        json!({
            "query": "annual leave",
            "categories": ["hr", "policy"],
            "top_n_per_category": 2,
            "save_to_postgres": true
        })
    );
    let shown = execute(&state, parse_command("show esResults").unwrap())
        .await
        .unwrap();
    assert!(shown.contains("\"query\": \"annual leave\""));
}

#[tokio::test]
async fn test_run_loop_transcript() {
    let rec = Recorder::default();
    let state = state_for(happy_backend(rec.clone())).await;

    let script = b"kb foo\nbogus\nset sessionId s-1\nchat hi there\nrate 4\nquit\nchat never sent\n";
    let mut out = Vec::new();
    run_loop(&state, &script[..], &mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("- 1 - Doc A\n- 7 - Doc B\n"));
    assert!(out.contains("unknown command 'bogus'"));
    assert!(out.contains("#42:\n\nhi\n"));
    assert!(out.contains("\"ok\": true"));

    let seen = rec.all().await;
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].body["session_id"], "s-1");
    assert_eq!(seen[1].body["message"], "hi there");
    assert_eq!(seen[2].body, json!({"history_id": 42, "rating": 4}));
}

#[tokio::test]
async fn test_clicking_a_non_button_prints_the_error() {
    use kb_console::console::Command;

    let state = state_for(happy_backend(Recorder::default())).await;

    let out = execute(&state, Command::Click(ElementId::Answer)).await;
    assert_eq!(out.as_deref(), Some("'answer' is not a button"));

    let out = execute(
        &state,
        Command::Run {
            input: None,
            button: ElementId::KbResults,
            output: ElementId::KbResults,
        },
    )
    .await;
    assert_eq!(out.as_deref(), Some("'kbResults' is not a button"));
}
