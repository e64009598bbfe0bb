//! Disapproval operator CLI entrypoint.

fn main() -> anyhow::Result<()> {
    disapprove::initialize_command_line()
}
