//! Interactive console menu.
//!
//! Every state handler returns the next [`MenuState`]; [`MenuController::run`]
//! loops until [`MenuState::Terminated`], so quitting unwinds normally.

use std::io::{BufRead, Write};

use crate::catalog::{Catalog, TOP_GAMES_LIMIT};
use crate::core::{Game, Genre};
use crate::error::{BrowserError, Result};
use crate::favorites::{FavoritesStore, SaveOutcome};

pub const INVALID_INPUT: &str = "Invalid input, please enter a valid input";
pub const NO_GAMES_FOUND: &str = "No games found.";
pub const NO_GENRES_FOUND: &str = "No genres found.";
pub const NO_FAVORITES_FOUND: &str = "No favorite games found.";
pub const FAREWELL: &str = "Have a nice day!";

const MAIN_MENU: &str = "
        Main Menu
        1. Search a videogame
        2. Recommended videogames
        3. Your favourite videogames
        4. Quit application
";
const MENU_PROMPT: &str = "Enter the corresponding key to continue: ";
const SEARCH_PROMPT: &str = "Enter the name of the game you want to search: ";
const GENRE_PROMPT: &str = "Enter the index number of the genre: ";
const FAVORITE_PROMPT: &str = "Would you like to add this game to your favorite list? (yes/no) ";
const REPEAT_PROMPT: &str = "Would you like to search again? (yes/no): ";
const CONTINUE_PROMPT: &str = "Enter any key to continue: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Search,
    TopGamesByGenre,
    ViewFavorites,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
}

/// Map a 1-based genre choice to an index into a list of `len` genres
pub fn parse_genre_index(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=len).contains(choice))
        .map(|choice| choice - 1)
}

pub struct MenuController<R, W> {
    catalog: Catalog,
    favorites: FavoritesStore,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(catalog: Catalog, favorites: FavoritesStore, input: R, out: W) -> Self {
        Self {
            catalog,
            favorites,
            input,
            out,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Drive the menu until the user quits or input ends
    pub async fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Terminated {
            state = self.step(state).await?;
            tracing::debug!("Menu state: {:?}", state);
        }

        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    /// Run one state to completion and return the next one
    pub async fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::Search => self.search().await,
            MenuState::TopGamesByGenre => self.top_games().await,
            MenuState::ViewFavorites => self.view_favorites(),
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        writeln!(self.out, "{}", MAIN_MENU)?;

        let Some(choice) = self.prompt(MENU_PROMPT)? else {
            return Ok(MenuState::Terminated);
        };

        let next = match choice.as_str() {
            "1" => MenuState::Search,
            "2" => MenuState::TopGamesByGenre,
            "3" => MenuState::ViewFavorites,
            "4" => MenuState::Terminated,
            _ => {
                writeln!(self.out, "{}", INVALID_INPUT)?;
                MenuState::MainMenu
            }
        };
        Ok(next)
    }

    async fn search(&mut self) -> Result<MenuState> {
        loop {
            let Some(title) = self.prompt(SEARCH_PROMPT)? else {
                return Ok(MenuState::Terminated);
            };

            match self.catalog.search_first(&title).await {
                Some(game) => {
                    self.show_game(&game)?;
                    match self.ask_yes_no(FAVORITE_PROMPT)? {
                        Some(Answer::Yes) => self.save_favorite(&game.name)?,
                        Some(Answer::No) => {}
                        None => return Ok(MenuState::Terminated),
                    }
                }
                None => writeln!(self.out, "{}", NO_GAMES_FOUND)?,
            }

            match self.ask_yes_no(REPEAT_PROMPT)? {
                Some(Answer::Yes) => continue,
                Some(Answer::No) => return Ok(MenuState::MainMenu),
                None => return Ok(MenuState::Terminated),
            }
        }
    }

    async fn top_games(&mut self) -> Result<MenuState> {
        let genres = self.catalog.genres().await;
        if genres.is_empty() {
            writeln!(self.out, "{}", NO_GENRES_FOUND)?;
            return Ok(MenuState::MainMenu);
        }

        loop {
            self.show_genres(&genres)?;

            let genre = loop {
                let Some(choice) = self.prompt(GENRE_PROMPT)? else {
                    return Ok(MenuState::Terminated);
                };
                match parse_genre_index(&choice, genres.len()) {
                    Some(index) => break &genres[index],
                    None => writeln!(self.out, "{}", INVALID_INPUT)?,
                }
            };

            let games = self.catalog.top_rated(genre.id).await;
            if games.is_empty() {
                writeln!(self.out, "{}", NO_GAMES_FOUND)?;
            } else {
                writeln!(self.out, "Top {} games in {}", TOP_GAMES_LIMIT, genre.name)?;
                for (i, game) in games.iter().enumerate() {
                    writeln!(self.out, "{}. {} (rating: {})", i + 1, game.name, game.rating_label())?;
                }
            }

            match self.ask_yes_no(REPEAT_PROMPT)? {
                Some(Answer::Yes) => continue,
                Some(Answer::No) => return Ok(MenuState::MainMenu),
                None => return Ok(MenuState::Terminated),
            }
        }
    }

    fn view_favorites(&mut self) -> Result<MenuState> {
        match self.favorites.list() {
            Ok(titles) if titles.is_empty() => writeln!(self.out, "{}", NO_FAVORITES_FOUND)?,
            Ok(titles) => {
                writeln!(self.out, "Your favorite games:")?;
                for (i, title) in titles.iter().enumerate() {
                    writeln!(self.out, "{}. {}", i + 1, title)?;
                }
            }
            Err(BrowserError::FavoritesMissing(path)) => {
                tracing::warn!("Favorites file {} does not exist", path.display());
                writeln!(
                    self.out,
                    "Your favorite list could not be opened: {} does not exist yet.",
                    path.display()
                )?;
            }
            Err(e) => {
                tracing::error!("Failed to read favorites: {}", e);
                writeln!(self.out, "Your favorite list could not be read: {}", e)?;
            }
        }

        match self.prompt(CONTINUE_PROMPT)? {
            Some(_) => Ok(MenuState::MainMenu),
            None => Ok(MenuState::Terminated),
        }
    }

    fn show_game(&mut self, game: &Game) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Title: {}", game.name)?;
        writeln!(self.out, "Genre: {}", game.primary_genre())?;
        writeln!(self.out, "Platform: {}", game.primary_platform())?;
        writeln!(self.out, "Release date: {}", game.release_date())?;
        writeln!(self.out, "Rating: {}", game.rating_label())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn show_genres(&mut self, genres: &[Genre]) -> Result<()> {
        writeln!(self.out, "Available genres:")?;
        for (i, genre) in genres.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, genre.name)?;
        }
        Ok(())
    }

    fn save_favorite(&mut self, title: &str) -> Result<()> {
        match self.favorites.add(title) {
            Ok(SaveOutcome::Added) => {
                writeln!(self.out, "{} has been added to your favorite list.", title)?
            }
            Ok(SaveOutcome::AlreadyPresent) => {
                writeln!(self.out, "{} is already in your favorite list.", title)?
            }
            Err(e) => {
                tracing::error!("Failed to save favorite {}: {}", title, e);
                writeln!(self.out, "{} could not be saved: {}", title, e)?;
            }
        }
        Ok(())
    }

    /// Re-prompt until the answer is yes or no (any case); `None` once input ends
    fn ask_yes_no(&mut self, question: &str) -> Result<Option<Answer>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "yes" => return Ok(Some(Answer::Yes)),
                "no" => return Ok(Some(Answer::No)),
                _ => writeln!(self.out, "{}", INVALID_INPUT)?,
            }
        }
    }

    /// Print `text` and read one line without its line ending; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
