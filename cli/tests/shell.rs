//! Drives the shell end-to-end: scripted stdin, the ureq transport, and a
//! live mock server on a random port.

use posts_cli::{Shell, TerminalConfirm, UreqTransport};
use posts_core::render::EMPTY_TEXT;
use posts_core::{PostsApi, PostsController};

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn run_script(base_url: &str, script: &str, answers: &str) -> String {
    let api = PostsApi::new(base_url, UreqTransport::new());
    let confirm = TerminalConfirm::new(answers.as_bytes(), Vec::new());
    let controller = PostsController::new(api, confirm);
    let mut shell = Shell::new(controller, script.as_bytes(), Vec::new());
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn create_and_list() {
    let addr = start_server();
    let base = format!("http://{addr}/api");

    let output = run_script(
        &base,
        "title   \nsubmit\ntitle Hello\ndesc first post\nsubmit\nquit\n",
        "",
    );

    assert!(output.starts_with("Loading posts..."));
    assert!(output.contains(EMPTY_TEXT));
    assert!(output.contains("[error] Title must not be empty"));
    assert!(output.contains("[ok] Post created"));
    assert!(output.contains("== Posts (1) =="));
    assert!(output.contains("* Hello (ID: "));
    assert!(output.contains("  first post"));
}

#[test]
fn delete_asks_before_removing() {
    let addr = start_server();
    let base = format!("http://{addr}/api");

    // Create through the API so the test knows the server-assigned id.
    let api = PostsApi::new(&base, UreqTransport::new());
    let created = api
        .create(&posts_core::PostInput {
            title: "Keep me".to_string(),
            description: String::new(),
        })
        .unwrap()
        .unwrap();

    let script = format!("delete {id}\ndelete {id}\n", id = created.id);
    let output = run_script(&base, &script, "n\ny\n");

    assert_eq!(output.matches("[ok] Post deleted").count(), 1);
    assert!(output.contains(EMPTY_TEXT));
    assert!(api.list_all().unwrap().is_empty());
}

#[test]
fn unreachable_server_blocks_actions_until_retry() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let output = run_script(&format!("http://{addr}/api"), "submit\nretry\n", "");

    assert!(output.contains("Error: Cannot reach the server:"));
    assert!(output.contains("[error] Posts are unavailable; type `retry`"));
    assert_eq!(output.matches("Error: Cannot reach the server:").count(), 2);
}
