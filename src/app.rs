// App state and main event loop.
// Owns the project selection, per-repository language data, and the
// channel background fetch tasks report back on.

use std::collections::HashMap;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::cache::DiskStore;
use crate::error::Result;
use crate::fetch::{CachedFetcher, LANGUAGES_TTL, SystemClock, languages_cache_key};
use crate::github::{GitHubClient, Languages};
use crate::projects::{GITHUB_OWNER, PROJECTS, Project};
use crate::state::{LanguagesFetched, LoadingState};
use crate::ui;

/// Main application state.
pub struct App {
    /// Selection in the project list.
    pub list_state: ListState,
    /// Language data per repository name.
    languages: HashMap<String, LoadingState<Languages>>,
    /// Shared API client, cloned into fetch tasks.
    pub client: GitHubClient,
    /// Read-through cache wrapped around language fetches.
    fetcher: CachedFetcher<DiskStore, SystemClock>,
    /// Sender handed to each fetch task.
    fetch_tx: mpsc::UnboundedSender<LanguagesFetched>,
    /// Receiver drained once per frame.
    fetch_rx: mpsc::UnboundedReceiver<LanguagesFetched>,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let mut list_state = ListState::default();
        if !PROJECTS.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            list_state,
            languages: HashMap::new(),
            client: GitHubClient::from_env()?,
            fetcher: CachedFetcher::new(DiskStore::new(), SystemClock, LANGUAGES_TTL),
            fetch_tx,
            fetch_rx,
            should_quit: false,
        })
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.request_selected(false);

        while !self.should_quit {
            self.drain_fetches();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// The project under the cursor.
    pub fn selected_project(&self) -> Option<&'static Project> {
        PROJECTS.get(self.list_state.selected()?)
    }

    /// Language data for a project's repository.
    pub fn languages_for(&self, project: &Project) -> &LoadingState<Languages> {
        static IDLE: LoadingState<Languages> = LoadingState::Idle;

        project
            .repo
            .and_then(|repo| self.languages.get(repo))
            .unwrap_or(&IDLE)
    }

    /// Apply results delivered by finished fetch tasks.
    fn drain_fetches(&mut self) {
        while let Ok(message) = self.fetch_rx.try_recv() {
            self.apply_fetched(message);
        }
    }

    /// Store one fetch result. Results land in completion order, so
    /// for duplicate requests the last one wins.
    fn apply_fetched(&mut self, message: LanguagesFetched) {
        let state = match message.result {
            Ok(languages) => LoadingState::Loaded(languages),
            Err(error) => LoadingState::Error(error),
        };
        self.languages.insert(message.repo, state);
    }

    /// Kick off a background language fetch for the selected project.
    ///
    /// Data already loaded (or failed) stays put unless `force` is set;
    /// an in-flight request is never doubled up.
    fn request_selected(&mut self, force: bool) {
        let Some(project) = self.selected_project() else {
            return;
        };
        let Some(repo) = project.repo else {
            return;
        };

        let state = self.languages.entry(repo.to_string()).or_default();
        if state.is_loading() || (!force && !matches!(state, LoadingState::Idle)) {
            return;
        }
        *state = LoadingState::Loading;

        let client = self.client.clone();
        let fetcher = self.fetcher.clone();
        let tx = self.fetch_tx.clone();
        let repo = repo.to_string();

        tokio::spawn(async move {
            let cache_key = languages_cache_key(&repo);
            let result = fetcher
                .fetch_with_cache(&cache_key, || async {
                    client.get_languages(GITHUB_OWNER, &repo).await
                })
                .await;

            let _ = tx.send(LanguagesFetched {
                repo,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                        KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                        KeyCode::Char('g') => self.select_first(),
                        KeyCode::Char('G') => self.select_last(),
                        KeyCode::Char('r') => self.request_selected(true),
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    fn select_prev(&mut self) {
        if PROJECTS.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.request_selected(false);
    }

    fn select_next(&mut self) {
        if PROJECTS.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= PROJECTS.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
        self.request_selected(false);
    }

    fn select_first(&mut self) {
        if PROJECTS.is_empty() {
            return;
        }
        self.list_state.select(Some(0));
        self.request_selected(false);
    }

    fn select_last(&mut self) {
        if PROJECTS.is_empty() {
            return;
        }
        self.list_state.select(Some(PROJECTS.len() - 1));
        self.request_selected(false);
    }
}
