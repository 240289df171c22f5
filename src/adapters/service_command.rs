use std::process::Command;

use crate::domain::{AppError, InstanceDescriptor};
use crate::ports::ServiceRegistrar;

/// Registers init scripts through an `update-rc.d`-style command.
///
/// `register` runs `<command> <service> defaults`; `unregister` runs
/// `<command> -f <service> remove`. The configured command may carry leading
/// words such as `sudo update-rc.d`.
#[derive(Debug, Clone)]
pub struct CommandServiceRegistrar {
    program: String,
    prefix_args: Vec<String>,
}

impl CommandServiceRegistrar {
    pub fn new(command: &str) -> Result<Self, AppError> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| AppError::config_error("service.command must not be empty"))?;
        Ok(Self { program, prefix_args: words.collect() })
    }

    fn args_for<'a>(&'a self, tail: &[&'a str]) -> Vec<&'a str> {
        self.prefix_args.iter().map(String::as_str).chain(tail.iter().copied()).collect()
    }

    fn run(&self, tail: &[&str]) -> Result<String, AppError> {
        let args = self.args_for(tail);
        let rendered = format!("{} {}", self.program, args.join(" "));
        log::debug!("running {}", rendered);

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            AppError::ServiceRegistration { command: rendered.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ServiceRegistration {
                command: rendered,
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ServiceRegistrar for CommandServiceRegistrar {
    fn register(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        self.run(&[instance.service_name.as_str(), "defaults"])?;
        log::info!("registered service {}", instance.service_name);
        Ok(())
    }

    fn unregister(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        self.run(&["-f", instance.service_name.as_str(), "remove"])?;
        log::info!("unregistered service {}", instance.service_name);
        Ok(())
    }
}
