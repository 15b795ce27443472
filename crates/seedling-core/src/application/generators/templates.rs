//! Built-in file templates for the bundled generators.
//!
//! Rendered with [`crate::domain::render`]; unbound `${key}`s are left in
//! place, so every key used here must be bound by the generator.

pub const TASK_MODULE: &str = r#"from typing import Any
from seatools.task import ${base_class}


class ${class_name}(${base_class}):
    """${task_name}"""

    ${async_prefix}def _run(self, *args, **kwargs) -> Any:
        # TODO: task logic
        pass

    def _task_name(self) -> str:
        return "${task_name}"
"#;

pub const CMD_MAIN: &str = r#"import os
import click
from typing import Optional

from ${package_name}.boot import start
${extra_import}

@click.command()
@click.option('--project_dir', default=None, help='Project directory; discovered from the source tree when unset')
@click.option('--env', default='dev', help='Runtime environment: dev, test or pro. Default: dev')
@click.version_option(version="1.0.0", help='Show the command version')
@click.help_option('-h', '--help', help='Show command help')
def main(project_dir: Optional[str] = None,
         env: Optional[str] = 'dev') -> None:
    """${command} cmd."""
    if project_dir:
        os.environ['PROJECT_DIR'] = project_dir
    if env:
        os.environ['ENV'] = env

    # start ioc
    start()

    ${extra_run}

if __name__ == "__main__":
    main()
"#;

pub const CMD_LAUNCHER: &str = r#"#!/usr/bin/env bash
BIN_DIR=$(dirname "$(readlink -f "$0")")
PROJECT_DIR=$(dirname "$BIN_DIR")
cd "$PROJECT_DIR" || exit 1
echo "Project directory: $PROJECT_DIR"
git pull
source venv/bin/activate
poetry install --only main

stop_matching() {
  pids=$(pgrep -f "$1")
  if [ -z "$pids" ]; then
    echo "No running process matches $1"
    return
  fi
  for pid in $pids; do
    echo "Stopping process $pid"
    if kill "$pid"; then
      echo "Process $pid stopped"
    else
      echo "Failed to stop process $pid"
    fi
  done
}

stop_matching '${project_name}/venv/bin/${command}'
stop_matching '${project_name}-[A-Za-z0-9_\-]*-py3.[0-9]+/bin/${command}'

echo "Starting ${command}"
poetry run ${command} --env pro >> /dev/null 2>&1
deactivate
"#;

pub const CMD_DOCKERFILE: &str = r#"FROM python:3.9

WORKDIR /app

COPY . /app

RUN pip install --upgrade pip poetry

RUN poetry lock

RUN poetry install --only main

CMD poetry run ${command} --env pro
"#;

pub const CMD_SERVICE: &str = r#"  ${service}:
    container_name: ${project_name}_${service}
    build:
      context: .
      dockerfile: ${service}.Dockerfile
    image: ${project_name}_${service}:latest
    volumes:
      - ".:/app"
"#;

pub const APP_BOOT: &str = r#"
def start():
    """Start the app's runtime dependencies."""
    from .ioc import ioc_starter
    ioc_starter()

"#;

pub const APP_IOC: &str = r#"from seatools import ioc
from ${package_name}.config import get_config_dir


def ioc_starter():
    # run ioc
    ioc.run(scan_package_names=[
        '${package_name}'
    ],
            config_dir=get_config_dir(),
            # modules to skip while scanning, e.g. ${package_name}.xxx
            exclude_modules=[])
"#;

pub const APP_CONFIG: &str = r#"import os


def get_project_dir():
    """Project directory; resolve every data file from here."""
    return os.environ.get('PROJECT_DIR', os.path.dirname(os.path.dirname(os.path.dirname(os.path.dirname(__file__)))))


def get_src_dir():
    """Source directory holding every package."""
    return get_project_dir() + os.sep + 'src'


def get_package_dir():
    """This app's package directory."""
    return get_src_dir() + os.sep + '${package_name}'


def get_extensions_dir():
    """Extensions directory."""
    return get_project_dir() + os.sep + 'extensions'


def get_config_dir():
    """Configuration directory."""
    return get_project_dir() + os.sep + 'config'
"#;
