use std::future::Future;

use futures::future::{join_all, BoxFuture};

use crate::{TaskErrors, TaskFailure};

/// A named unit of work for [`run_all`].
pub struct Task<'a> {
    name: String,
    work: BoxFuture<'a, anyhow::Result<()>>,
}

impl<'a> Task<'a> {
    pub fn new<F>(name: impl Into<String>, work: F) -> Task<'a>
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'a,
    {
        Task {
            name: name.into(),
            work: Box::pin(work),
        }
    }
}

/// Drives every task concurrently and waits for all of them.
///
/// A failing task does not cancel the others. Results are only looked at
/// once the last task is done; every failure ends up in the returned
/// [`TaskErrors`], in the order the tasks were given.
pub async fn run_all(tasks: Vec<Task<'_>>) -> Result<(), TaskErrors> {
    let total = tasks.len();
    tracing::debug!(total, "starting tasks");

    let (names, work): (Vec<_>, Vec<_>) = tasks
        .into_iter()
        .map(|Task { name, work }| {
            let traced_name = name.clone();
            let work = async move {
                let result = work.await;
                match &result {
                    Ok(()) => tracing::info!(task = %traced_name, "finished"),
                    Err(error) => tracing::info!(task = %traced_name, error = %format!("{error:#}"), "failed"),
                }
                result
            };
            (name, work)
        })
        .unzip();

    // one result slot per task, in launch order
    let results = join_all(work).await;

    let failures = names
        .into_iter()
        .zip(results)
        .filter_map(|(name, result)| result.err().map(|error| TaskFailure { name, error }))
        .collect();

    match TaskErrors::from_failures(total, failures) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use anyhow::anyhow;
    use speculoos::prelude::*;
    use tokio::sync::Barrier;

    use super::{run_all, Task};

    #[tokio::test]
    async fn it_succeeds_when_every_task_succeeds() {
        let runs = AtomicUsize::new(0);
        let tasks = vec![
            Task::new("first", async {
                runs.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
            Task::new("second", async {
                runs.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        ];

        assert_that!(run_all(tasks).await).is_ok();
        assert_that!(runs.load(Ordering::SeqCst)).is_equal_to(2);
    }

    #[tokio::test]
    async fn it_finishes_the_other_task_when_one_fails() {
        let finished = AtomicBool::new(false);
        let tasks = vec![
            Task::new("slow success", async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                finished.store(true, Ordering::SeqCst);
                Ok(())
            }),
            Task::new("quick failure", async { Err(anyhow!("download refused")) }),
        ];

        let result = run_all(tasks).await;

        assert_that!(finished.load(Ordering::SeqCst)).is_true();
        let errors = assert_that!(result).is_err().subject;
        assert_that!(errors.total()).is_equal_to(2);
        assert_that!(errors.failures().len()).is_equal_to(1);
        assert_that!(errors.failures()[0].name.as_str()).is_equal_to("quick failure");
        assert_that!(errors.to_string()).contains("quick failure: download refused");
    }

    #[tokio::test]
    async fn it_keeps_every_failure_in_launch_order() {
        let tasks = vec![
            Task::new("a", async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Err(anyhow!("late"))
            }),
            Task::new("b", async { Err(anyhow!("early")) }),
        ];

        let errors = run_all(tasks).await.unwrap_err();
        let names: Vec<&str> = errors.failures().iter().map(|f| f.name.as_str()).collect();

        assert_that!(names).is_equal_to(vec!["a", "b"]);
        assert_that!(errors.to_string()).contains("a: late");
        assert_that!(errors.to_string()).contains("b: early");
    }

    #[tokio::test]
    async fn it_runs_tasks_concurrently() {
        // each task waits for the other, so running them one after the other never ends
        let barrier = Arc::new(Barrier::new(2));
        let tasks = ["left", "right"]
            .into_iter()
            .map(|name| {
                let barrier = Arc::clone(&barrier);
                Task::new(name, async move {
                    barrier.wait().await;
                    Ok(())
                })
            })
            .collect();

        let result = tokio::time::timeout(Duration::from_secs(5), run_all(tasks)).await;

        assert_that!(result).is_ok().is_ok();
    }

    #[tokio::test]
    async fn it_accepts_an_empty_set_of_tasks() {
        assert_that!(run_all(Vec::new()).await).is_ok();
    }
}
