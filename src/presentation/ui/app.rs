//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::ShareService;
use crate::application::use_cases::{CreateProposalUseCase, SubmitProjectUseCase};
use crate::domain::entities::{CategoryFilter, Project, ProjectCatalog, Proposal, User};
use crate::domain::ports::SubmissionPort;
use crate::infrastructure::ClipboardService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::mock_data;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    AboutAction, AboutScreen, CreateProposalAction, CreateProposalScreen, DashboardAction,
    DashboardScreen, GovernanceAction, GovernanceScreen, HomeAction, HomeScreen, ProjectAction,
    ProjectScreen, ProjectsAction, ProjectsScreen, SubmitProjectAction, SubmitProjectScreen,
};
use crate::presentation::widgets::{FooterBar, HeaderBar, KeyHint};

const TICK_RATE: Duration = Duration::from_millis(250);
const COPIED_NOTICE_TTL: Duration = Duration::from_secs(2);
const SCROLL_PAGE: u16 = 10;

/// The active view. Exactly one variant exists at a time; each carries its
/// screen-local state, built fresh on every transition.
pub enum Screen {
    Home(HomeScreen),
    Project(ProjectScreen),
    Dashboard(DashboardScreen),
    SubmitProject(SubmitProjectScreen),
    Governance(GovernanceScreen),
    CreateProposal(CreateProposalScreen),
    Projects(ProjectsScreen),
    About(AboutScreen),
}

/// Payload-free discriminant of [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Project,
    Dashboard,
    SubmitProject,
    Governance,
    CreateProposal,
    Projects,
    About,
}

impl Screen {
    /// Returns the payload-free discriminant.
    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        match self {
            Self::Home(_) => ViewKind::Home,
            Self::Project(_) => ViewKind::Project,
            Self::Dashboard(_) => ViewKind::Dashboard,
            Self::SubmitProject(_) => ViewKind::SubmitProject,
            Self::Governance(_) => ViewKind::Governance,
            Self::CreateProposal(_) => ViewKind::CreateProposal,
            Self::Projects(_) => ViewKind::Projects,
            Self::About(_) => ViewKind::About,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Home(_) => "Home".to_string(),
            Self::Project(screen) => screen.project().title().to_string(),
            Self::Dashboard(_) => "Dashboard".to_string(),
            Self::SubmitProject(_) => "Submit a project".to_string(),
            Self::Governance(_) => "Governance".to_string(),
            Self::CreateProposal(_) => "New proposal".to_string(),
            Self::Projects(_) => "Projects".to_string(),
            Self::About(_) => "About".to_string(),
        }
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        match self {
            Self::Home(_) => &HomeScreen::KEY_HINTS,
            Self::Project(_) => &ProjectScreen::KEY_HINTS,
            Self::Dashboard(_) => &DashboardScreen::KEY_HINTS,
            Self::SubmitProject(_) => &SubmitProjectScreen::KEY_HINTS,
            Self::Governance(_) => &GovernanceScreen::KEY_HINTS,
            Self::CreateProposal(_) => &CreateProposalScreen::KEY_HINTS,
            Self::Projects(_) => &ProjectsScreen::KEY_HINTS,
            Self::About(_) => &AboutScreen::KEY_HINTS,
        }
    }
}

enum ScreenAction {
    Home(HomeAction),
    Project(ProjectAction),
    Dashboard(DashboardAction),
    SubmitProject(SubmitProjectAction),
    Governance(GovernanceAction),
    CreateProposal(CreateProposalAction),
    Projects(ProjectsAction),
    About(AboutAction),
}

pub struct App {
    screen: Screen,
    session: Option<User>,
    catalog: ProjectCatalog,
    proposals: Vec<Proposal>,
    category_filter: CategoryFilter,
    scroll: u16,
    copied_at: Option<Instant>,
    submit_project: SubmitProjectUseCase,
    create_proposal: CreateProposalUseCase,
    clipboard: ClipboardService,
    share: ShareService,
    config: AppConfig,
}

impl App {
    /// Creates the app over a catalog and proposal snapshot.
    #[must_use]
    pub fn new(
        submissions: Arc<dyn SubmissionPort>,
        catalog: ProjectCatalog,
        proposals: Vec<Proposal>,
        config: AppConfig,
    ) -> Self {
        let share = ShareService::new(config.share_base_url.clone());

        Self {
            screen: Screen::Home(HomeScreen::new(&catalog)),
            session: None,
            catalog,
            proposals,
            category_filter: CategoryFilter::All,
            scroll: 0,
            copied_at: None,
            submit_project: SubmitProjectUseCase::new(submissions.clone()),
            create_proposal: CreateProposalUseCase::new(submissions),
            clipboard: ClipboardService::new(),
            share,
            config,
        }
    }

    /// Returns the active view discriminant.
    #[must_use]
    pub const fn view(&self) -> ViewKind {
        self.screen.kind()
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the connected session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    // Transition handlers. Each replaces the active screen wholesale; the
    // scroll offset resets only where the original front-end scrolled the
    // page back to the top.

    pub fn open_projects(&mut self) {
        self.screen = Screen::Projects(ProjectsScreen::new(
            self.catalog.clone(),
            self.category_filter,
        ));
        self.scroll = 0;
    }

    pub fn open_governance(&mut self) {
        self.screen = Screen::Governance(self.make_governance_screen());
        self.scroll = 0;
    }

    pub fn close_governance(&mut self) {
        self.screen = Screen::Home(HomeScreen::new(&self.catalog));
        self.scroll = 0;
    }

    pub fn open_about(&mut self) {
        self.screen = Screen::About(AboutScreen::new());
        self.scroll = 0;
    }

    pub fn open_dashboard(&mut self) {
        self.screen = Screen::Dashboard(self.make_dashboard_screen());
        self.scroll = 0;
    }

    pub fn open_submit_project(&mut self) {
        self.screen = Screen::SubmitProject(SubmitProjectScreen::new());
        self.scroll = 0;
    }

    pub fn close_submit_project(&mut self) {
        self.screen = Screen::Dashboard(self.make_dashboard_screen());
        self.scroll = 0;
    }

    pub fn open_create_proposal(&mut self) {
        self.screen = Screen::CreateProposal(CreateProposalScreen::new());
        self.scroll = 0;
    }

    pub fn close_create_proposal(&mut self) {
        self.screen = Screen::Governance(self.make_governance_screen());
        self.scroll = 0;
    }

    pub fn select_project(&mut self, project: Project) {
        self.screen = Screen::Project(ProjectScreen::new(project));
        self.scroll = 0;
    }

    /// Back from a project detail to the list. Keeps the scroll offset and
    /// the category filter.
    pub fn deselect_project(&mut self) {
        self.screen = Screen::Projects(ProjectsScreen::new(
            self.catalog.clone(),
            self.category_filter,
        ));
    }

    /// Back to the landing screen. Keeps the scroll offset.
    pub fn back_to_home(&mut self) {
        self.screen = Screen::Home(HomeScreen::new(&self.catalog));
    }

    /// With a session, opens the submission form; without one, connects the
    /// wallet and stays put.
    pub fn start_project(&mut self) {
        if self.session.is_some() {
            self.open_submit_project();
        } else {
            self.connect_wallet();
        }
    }

    /// Installs the fixed mock identity. Does not navigate.
    pub fn connect_wallet(&mut self) {
        if self.session.is_some() {
            return;
        }
        let user = mock_data::wallet_identity();
        info!(address = %user.short_address(), "Wallet connected");
        self.session = Some(user);
        self.refresh_session_screen();
    }

    /// Clears the session and returns to the landing screen from any view.
    pub fn disconnect(&mut self) {
        info!("Wallet disconnected");
        self.session = None;
        self.back_to_home();
    }

    /// Full reset to the initial state, the terminal stand-in for reloading
    /// the page.
    pub fn reset(&mut self) {
        debug!("Resetting to initial state");
        self.session = None;
        self.category_filter = CategoryFilter::All;
        self.scroll = 0;
        self.copied_at = None;
        self.screen = Screen::Home(HomeScreen::new(&self.catalog));
    }

    fn toggle_wallet(&mut self) {
        if self.session.is_some() {
            self.disconnect();
        } else {
            self.connect_wallet();
        }
    }

    fn make_dashboard_screen(&self) -> DashboardScreen {
        DashboardScreen::new(
            self.session.clone(),
            &self.catalog,
            &self.config.ui.date_format,
        )
    }

    fn make_governance_screen(&self) -> GovernanceScreen {
        GovernanceScreen::new(
            self.proposals.clone(),
            self.session.as_ref().map(User::fort_balance),
            &self.config.ui.date_format,
        )
    }

    /// Session-dependent screens are rebuilt in place when the session
    /// changes without a navigation.
    fn refresh_session_screen(&mut self) {
        match self.screen {
            Screen::Dashboard(_) => {
                self.screen = Screen::Dashboard(self.make_dashboard_screen());
            }
            Screen::Governance(_) => {
                self.screen = Screen::Governance(self.make_governance_screen());
            }
            _ => {}
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        debug!(text = %text, "Copying to clipboard");
        self.clipboard.set_text(text);
        self.copied_at = Some(Instant::now());
    }

    fn copied_notice(&self) -> Option<&'static str> {
        self.copied_at
            .filter(|at| at.elapsed() < COPIED_NOTICE_TTL)
            .map(|_| "Copied!")
    }

    fn expire_copied_notice(&mut self) {
        if let Some(at) = self.copied_at
            && at.elapsed() >= COPIED_NOTICE_TTL
        {
            self.copied_at = None;
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(SCROLL_PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(SCROLL_PAGE),
            _ => {}
        }
    }

    /// Routes a key press: global chords first, then the active screen.
    pub async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_reset_event(&key) {
            self.reset();
            return EventResult::Continue;
        }

        let in_form = matches!(
            self.screen,
            Screen::SubmitProject(_) | Screen::CreateProposal(_)
        );
        if in_form {
            if EventHandler::is_force_quit_event(&key) {
                return EventResult::Exit;
            }
        } else {
            if EventHandler::is_quit_event(&key) {
                return EventResult::Exit;
            }
            if key.code == KeyCode::Char('w') {
                self.toggle_wallet();
                return EventResult::Continue;
            }
        }

        let action = match &mut self.screen {
            Screen::Home(screen) => ScreenAction::Home(screen.handle_key(key)),
            Screen::Project(screen) => ScreenAction::Project(screen.handle_key(key)),
            Screen::Dashboard(screen) => ScreenAction::Dashboard(screen.handle_key(key)),
            Screen::SubmitProject(screen) => ScreenAction::SubmitProject(screen.handle_key(key)),
            Screen::Governance(screen) => ScreenAction::Governance(screen.handle_key(key)),
            Screen::CreateProposal(screen) => {
                ScreenAction::CreateProposal(screen.handle_key(key))
            }
            Screen::Projects(screen) => ScreenAction::Projects(screen.handle_key(key)),
            Screen::About(screen) => ScreenAction::About(screen.handle_key(key)),
        };

        // The filter outlives the screen; capture it before any transition
        // below replaces the screen.
        if let Screen::Projects(screen) = &self.screen {
            self.category_filter = screen.filter();
        }

        self.handle_screen_action(action, key).await;
        EventResult::Continue
    }

    async fn handle_screen_action(&mut self, action: ScreenAction, key: KeyEvent) {
        match action {
            ScreenAction::Home(action) => match action {
                HomeAction::OpenProjects => self.open_projects(),
                HomeAction::OpenGovernance => self.open_governance(),
                HomeAction::OpenAbout => self.open_about(),
                HomeAction::OpenDashboard => self.open_dashboard(),
                HomeAction::StartProject => self.start_project(),
                HomeAction::None => self.handle_scroll_key(key),
            },
            ScreenAction::Project(action) => match action {
                ProjectAction::Share(project) => {
                    let url = self.share.project_url(&project);
                    self.copy_to_clipboard(url);
                }
                ProjectAction::CopyWallet(address) => self.copy_to_clipboard(address),
                ProjectAction::Back => self.deselect_project(),
                ProjectAction::None => self.handle_scroll_key(key),
                ProjectAction::Consumed => {}
            },
            ScreenAction::Dashboard(action) => match action {
                DashboardAction::OpenProject(project) => self.select_project(project),
                DashboardAction::CopyAddress(address) => self.copy_to_clipboard(address),
                DashboardAction::OpenSubmitProject => self.open_submit_project(),
                DashboardAction::Back => self.back_to_home(),
                DashboardAction::None | DashboardAction::Consumed => {}
            },
            ScreenAction::SubmitProject(action) => match action {
                SubmitProjectAction::Submit(submission) => {
                    let result = self.submit_project.execute(submission).await;
                    if let Screen::SubmitProject(screen) = &mut self.screen {
                        match result {
                            Ok(receipt) => screen.set_receipt(receipt),
                            Err(e) => screen.set_error(e.to_string()),
                        }
                    }
                }
                SubmitProjectAction::Back => self.close_submit_project(),
                SubmitProjectAction::None | SubmitProjectAction::Consumed => {}
            },
            ScreenAction::Governance(action) => match action {
                GovernanceAction::NewProposal => self.open_create_proposal(),
                GovernanceAction::Back => self.close_governance(),
                GovernanceAction::None => self.handle_scroll_key(key),
                GovernanceAction::Consumed => {}
            },
            ScreenAction::CreateProposal(action) => match action {
                CreateProposalAction::Submit(draft) => {
                    match self.create_proposal.execute(draft).await {
                        Ok(_) => self.close_create_proposal(),
                        Err(e) => {
                            if let Screen::CreateProposal(screen) = &mut self.screen {
                                screen.set_error(e.to_string());
                            }
                        }
                    }
                }
                CreateProposalAction::Cancel => self.close_create_proposal(),
                CreateProposalAction::None | CreateProposalAction::Consumed => {}
            },
            ScreenAction::Projects(action) => match action {
                ProjectsAction::Open(project) => self.select_project(project),
                ProjectsAction::Share(project) => {
                    let url = self.share.project_url(&project);
                    self.copy_to_clipboard(url);
                }
                ProjectsAction::Back => self.back_to_home(),
                ProjectsAction::None | ProjectsAction::Consumed => {}
            },
            ScreenAction::About(action) => match action {
                AboutAction::Back => self.back_to_home(),
                AboutAction::None => self.handle_scroll_key(key),
            },
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = self.screen.title();
        let header = HeaderBar::new(crate::NAME, &title)
            .session_address(self.session.as_ref().map(User::short_address));
        frame.render_widget(header, header_area);

        let mut scroll = self.scroll;
        match &self.screen {
            Screen::Home(screen) => {
                frame.render_stateful_widget(screen, content_area, &mut scroll);
            }
            Screen::Project(screen) => {
                frame.render_stateful_widget(screen, content_area, &mut scroll);
            }
            Screen::Dashboard(screen) => frame.render_widget(screen, content_area),
            Screen::SubmitProject(screen) => frame.render_widget(screen, content_area),
            Screen::Governance(screen) => {
                frame.render_stateful_widget(screen, content_area, &mut scroll);
            }
            Screen::CreateProposal(screen) => frame.render_widget(screen, content_area),
            Screen::Projects(screen) => frame.render_widget(screen, content_area),
            Screen::About(screen) => {
                frame.render_stateful_widget(screen, content_area, &mut scroll);
            }
        }

        let footer = FooterBar::new(self.screen.key_hints())
            .show_hints(self.config.ui.show_hints)
            .right_info(self.copied_notice());
        frame.render_widget(footer, footer_area);
    }

    /// Runs the event loop until quit.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        loop {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && key.kind == KeyEventKind::Press
                        && self.handle_key(key).await == EventResult::Exit
                    {
                        break;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick.tick() => {
                    self.expire_copied_notice();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }
}
