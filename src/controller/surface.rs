//! Output regions the controller paints

use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Recipe,
    Favorites,
    Remix,
}

impl Region {
    pub fn title(&self) -> &'static str {
        match self {
            Region::Recipe => "Recipe",
            Region::Favorites => "Saved Recipes",
            Region::Remix => "Remix",
        }
    }
}

/// A display with independently replaceable regions
pub trait Surface: Send {
    /// Replace the content of `region`
    fn paint(&mut self, region: Region, content: &str);

    /// Hide `region`
    fn clear(&mut self, region: Region);
}

/// Surface that prints each repainted region to a writer
pub struct TerminalSurface<W: Write + Send> {
    out: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn paint(&mut self, region: Region, content: &str) {
        // A closed stdout is not worth aborting the session for
        let _ = writeln!(self.out, "\n── {} ──\n{}", region.title(), content);
        let _ = self.out.flush();
    }

    fn clear(&mut self, region: Region) {
        if region == Region::Favorites {
            let _ = writeln!(self.out, "\n── {} ──\n(none saved)", region.title());
            let _ = self.out.flush();
        }
    }
}

/// Surface that keeps the latest content of each region and a paint log
#[derive(Debug, Default)]
pub struct MemorySurface {
    regions: HashMap<Region, String>,
    history: Vec<(Region, Option<String>)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of `region`, `None` when hidden or never painted
    pub fn content(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Every paint (`Some`) and clear (`None`) in order
    pub fn history(&self) -> &[(Region, Option<String>)] {
        &self.history
    }

    /// Contents painted into `region`, oldest first
    pub fn painted(&self, region: Region) -> Vec<&str> {
        self.history
            .iter()
            .filter(|(r, _)| *r == region)
            .filter_map(|(_, content)| content.as_deref())
            .collect()
    }
}

impl Surface for MemorySurface {
    fn paint(&mut self, region: Region, content: &str) {
        self.regions.insert(region, content.to_string());
        self.history.push((region, Some(content.to_string())));
    }

    fn clear(&mut self, region: Region) {
        self.regions.remove(&region);
        self.history.push((region, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_surface_writes_region_header() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.paint(Region::Remix, "Pirate pancakes");
        surface.clear(Region::Favorites);

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert!(text.contains("── Remix ──\nPirate pancakes\n"));
        assert!(text.contains("── Saved Recipes ──\n(none saved)\n"));
    }

    #[test]
    fn test_memory_surface_tracks_latest_and_history() {
        let mut surface = MemorySurface::new();
        surface.paint(Region::Recipe, "Loading...");
        surface.paint(Region::Recipe, "Kedgeree");
        surface.clear(Region::Favorites);

        assert_eq!(surface.content(Region::Recipe), Some("Kedgeree"));
        assert_eq!(surface.content(Region::Favorites), None);
        assert_eq!(surface.painted(Region::Recipe), vec!["Loading...", "Kedgeree"]);
        assert_eq!(surface.history().len(), 3);
    }
}
