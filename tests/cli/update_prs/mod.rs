mod close_succeeds_for_every_cloned_repo_contract;
mod description_requires_readme_contract;
mod prompt_without_terminal_aborts_contract;
