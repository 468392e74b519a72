//! End-to-end runtime smoke test (headless)
//! - Starts `fieldwright::app::run(true, None)` in the background.
//! - Runs with `FIELDWRIGHT_TEST_HEADLESS=1` to bypass raw TTY setup/restore.
//! - Waits briefly to allow initialization and a few ticks.
//! - Asserts the task does not panic. If it finishes, it must return `Ok(())`.
//! - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("FIELDWRIGHT_TEST_HEADLESS", "1");
    }

    let handle = tokio::spawn(async { fieldwright::app::run(true, None).await });

    // Long enough for at least one tick of the autosave timer.
    tokio::time::sleep(Duration::from_millis(300)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
