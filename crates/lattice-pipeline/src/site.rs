//! External static-site generator invocation.
//!
//! Every task is fire-and-forget: the child process is spawned and its
//! result discarded. Exit codes are never inspected and failures do not
//! affect the task's own status messages. The generator command is
//! configurable (`[site] command` in docs.toml).

use tokio::process::Command;

/// Handle to the external static-site generator.
#[derive(Debug, Clone)]
pub struct SiteGenerator {
    command: String,
}

impl SiteGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Spawn the generator's build.
    pub fn build(&self) {
        self.fire(&build_args());
    }

    /// Spawn the generator's clean.
    pub fn clean(&self) {
        self.fire(&clean_args());
    }

    /// Spawn the generator's dev server on `port`.
    pub fn serve(&self, port: u16) {
        self.fire(&serve_args(port));
    }

    fn fire(&self, args: &[String]) {
        tracing::debug!("Spawning {} {}", self.command, args.join(" "));
        if let Err(error) = Command::new(&self.command).args(args).spawn() {
            // Discarded like every other process result; traced so a missing
            // generator binary is still diagnosable under --verbose.
            tracing::debug!("Failed to spawn {}: {error}", self.command);
        }
    }
}

fn build_args() -> Vec<String> {
    vec!["build".to_string()]
}

fn clean_args() -> Vec<String> {
    vec!["build".to_string(), "--clean".to_string()]
}

fn serve_args(port: u16) -> Vec<String> {
    vec!["serve".to_string(), format!("--dev-addr=0.0.0.0:{port}")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_reuses_the_build_command() {
        assert_eq!(clean_args(), vec!["build", "--clean"]);
    }

    #[test]
    fn serve_binds_all_interfaces_on_the_port() {
        assert_eq!(serve_args(8000), vec!["serve", "--dev-addr=0.0.0.0:8000"]);
        assert_eq!(serve_args(9090), vec!["serve", "--dev-addr=0.0.0.0:9090"]);
    }

    #[tokio::test]
    async fn missing_generator_binary_is_swallowed() {
        let generator = SiteGenerator::new("lattice-docs-no-such-generator");
        generator.build();
        generator.clean();
        generator.serve(8000);
    }
}
