use crate::api::{
    decode_page, Achievement, Ad, ApiError, Author, Chapter, ChapterReport, CollectionSource,
    Comment, Doujinshi, Genre, Group, Manga, Member, Page, Pet, RemoteEntity, Row,
};
use crate::filter::{FilterField, FilterState, ListingQuery, SelectOption, ACTIVE_OPTIONS};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

/// How a section renders its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Grid,
}

/// A listing column. Sortable columns name the API sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub sort_key: Option<&'static str>,
}

const fn col(label: &'static str) -> Column {
    Column {
        label,
        sort_key: None,
    }
}

const fn sortable(label: &'static str, key: &'static str) -> Column {
    Column {
        label,
        sort_key: Some(key),
    }
}

const PUBLICATION_STATUS: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "ongoing", label: "Ongoing" },
    SelectOption { value: "completed", label: "Completed" },
    SelectOption { value: "dropped", label: "Dropped" },
];

const MEMBER_ROLES: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "admin", label: "Admin" },
    SelectOption { value: "moderator", label: "Moderator" },
    SelectOption { value: "translator", label: "Translator" },
    SelectOption { value: "member", label: "Member" },
];

const COMMENT_VISIBILITY: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "false", label: "Visible" },
    SelectOption { value: "true", label: "Hidden" },
];

const AD_POSITIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "header", label: "Header" },
    SelectOption { value: "sidebar", label: "Sidebar" },
    SelectOption { value: "reader", label: "In reader" },
    SelectOption { value: "popup", label: "Popup" },
];

const PET_RARITIES: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "common", label: "Common" },
    SelectOption { value: "rare", label: "Rare" },
    SelectOption { value: "epic", label: "Epic" },
    SelectOption { value: "legendary", label: "Legendary" },
];

const REPORT_STATUS: &[SelectOption] = &[
    SelectOption { value: "", label: "All" },
    SelectOption { value: "pending", label: "Pending" },
    SelectOption { value: "resolved", label: "Resolved" },
    SelectOption { value: "rejected", label: "Rejected" },
];

const MANGA_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::text("author", "Author"),
    FilterField::select("status", "Status", PUBLICATION_STATUS),
    FilterField::select("is_active", "Visibility", ACTIVE_OPTIONS),
    FilterField::date("updated_from", "Updated from"),
    FilterField::date("updated_to", "Updated to"),
];

const CHAPTER_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Chapter name").required(),
    FilterField::text("manga", "Manga"),
    FilterField::date("created_from", "Created from"),
    FilterField::date("created_to", "Created to"),
];

const AUTHOR_FILTERS: &[FilterField] = &[FilterField::text("name", "Name")];

const GENRE_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::text("slug", "Slug"),
];

const GROUP_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::text("owner", "Owner"),
];

const MEMBER_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::text("email", "Email"),
    FilterField::select("role", "Role", MEMBER_ROLES),
    FilterField::select("is_active", "Status", ACTIVE_OPTIONS),
    FilterField::date("created_from", "Joined from"),
    FilterField::date("created_to", "Joined to"),
];

const COMMENT_FILTERS: &[FilterField] = &[
    FilterField::text("content", "Content"),
    FilterField::text("user", "User"),
    FilterField::text("manga", "Manga"),
    FilterField::select("is_hidden", "Visibility", COMMENT_VISIBILITY),
    FilterField::date("created_from", "Posted from"),
    FilterField::date("created_to", "Posted to"),
];

const AD_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::select("position", "Position", AD_POSITIONS),
    FilterField::select("is_active", "Status", ACTIVE_OPTIONS),
];

const ACHIEVEMENT_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::select("is_active", "Status", ACTIVE_OPTIONS),
];

const DOUJINSHI_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::text("parody", "Parody"),
    FilterField::select("status", "Status", PUBLICATION_STATUS),
];

const PET_FILTERS: &[FilterField] = &[
    FilterField::text("name", "Name"),
    FilterField::select("rarity", "Rarity", PET_RARITIES),
    FilterField::select("is_active", "Status", ACTIVE_OPTIONS),
];

const REPORT_FILTERS: &[FilterField] = &[
    FilterField::text("manga", "Manga"),
    FilterField::text("chapter", "Chapter"),
    FilterField::select("status", "Status", REPORT_STATUS),
    FilterField::date("created_from", "Reported from"),
    FilterField::date("created_to", "Reported to"),
];

const MANGA_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Author"),
    col("Status"),
    sortable("Views", "views"),
    col("Visibility"),
    sortable("Updated", "updated_at"),
];

const CHAPTERS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Manga"),
    sortable("Views", "views"),
    sortable("Created", "created_at"),
];

const AUTHORS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Manga"),
    sortable("Created", "created_at"),
];

const GENRES_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Slug"),
    col("Manga"),
    col("Description"),
];

const GROUPS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Owner"),
    sortable("Members", "member_count"),
    sortable("Created", "created_at"),
];

const MEMBERS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Email"),
    col("Role"),
    col("Status"),
    sortable("Joined", "created_at"),
];

const COMMENTS_COLUMNS: &[Column] = &[
    col("Content"),
    col("User"),
    col("Manga"),
    col("Visibility"),
    sortable("Posted", "created_at"),
];

const ADS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Position"),
    col("Status"),
    sortable("Starts", "start_date"),
    col("Ends"),
];

const ACHIEVEMENTS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Description"),
    sortable("Points", "points"),
    col("Status"),
];

const DOUJINSHI_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Parody"),
    col("Status"),
    sortable("Views", "views"),
    sortable("Updated", "updated_at"),
];

const PETS_COLUMNS: &[Column] = &[
    sortable("Name", "name"),
    col("Rarity"),
    sortable("Price", "price"),
    col("Status"),
];

const CHAPTER_REPORTS_COLUMNS: &[Column] = &[
    col("Manga"),
    col("Chapter"),
    col("Reason"),
    col("Status"),
    col("Reporter"),
    sortable("Reported", "created_at"),
];

/// One admin section of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Manga,
    Chapters,
    Authors,
    Genres,
    Groups,
    Members,
    Comments,
    Ads,
    Achievements,
    Doujinshi,
    Pets,
    ChapterReports,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::Manga,
        Section::Chapters,
        Section::Authors,
        Section::Genres,
        Section::Groups,
        Section::Members,
        Section::Comments,
        Section::Ads,
        Section::Achievements,
        Section::Doujinshi,
        Section::Pets,
        Section::ChapterReports,
    ];

    /// Route segment; also the API endpoint
    pub fn slug(self) -> &'static str {
        match self {
            Section::Manga => "manga",
            Section::Chapters => "chapters",
            Section::Authors => "authors",
            Section::Genres => "genres",
            Section::Groups => "groups",
            Section::Members => "members",
            Section::Comments => "comments",
            Section::Ads => "ads",
            Section::Achievements => "achievements",
            Section::Doujinshi => "doujinshi",
            Section::Pets => "pets",
            Section::ChapterReports => "chapter-reports",
        }
    }

    pub fn endpoint(self) -> &'static str {
        self.slug()
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Manga => "Manga",
            Section::Chapters => "Chapters",
            Section::Authors => "Authors",
            Section::Genres => "Genres",
            Section::Groups => "Groups",
            Section::Members => "Members",
            Section::Comments => "Comments",
            Section::Ads => "Ads",
            Section::Achievements => "Achievements",
            Section::Doujinshi => "Doujinshi",
            Section::Pets => "Pets",
            Section::ChapterReports => "Chapter reports",
        }
    }

    /// Document title of the section page
    pub fn title(self) -> &'static str {
        match self {
            Section::Manga => "Manga management",
            Section::Chapters => "Chapter management",
            Section::Authors => "Author management",
            Section::Genres => "Genre management",
            Section::Groups => "Translation group management",
            Section::Members => "Member management",
            Section::Comments => "Comment moderation",
            Section::Ads => "Advertisement management",
            Section::Achievements => "Achievement management",
            Section::Doujinshi => "Doujinshi management",
            Section::Pets => "Pet management",
            Section::ChapterReports => "Chapter reports",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::Manga => "Search, review and remove manga titles on MyManga VN.",
            Section::Chapters => "Browse chapters by name, manga and publication date.",
            Section::Authors => "Manage the authors credited on manga titles.",
            Section::Genres => "Manage the genres used to categorise manga.",
            Section::Groups => "Manage translation groups and their owners.",
            Section::Members => "Find members by name, email, role or status.",
            Section::Comments => "Moderate reader comments across all titles.",
            Section::Ads => "Manage advertisement placements and schedules.",
            Section::Achievements => "Manage achievements members can unlock.",
            Section::Doujinshi => "Search and manage doujinshi titles.",
            Section::Pets => "Manage the virtual pets available to members.",
            Section::ChapterReports => "Review chapter problems reported by readers.",
        }
    }

    pub fn filter_fields(self) -> &'static [FilterField] {
        match self {
            Section::Manga => MANGA_FILTERS,
            Section::Chapters => CHAPTER_FILTERS,
            Section::Authors => AUTHOR_FILTERS,
            Section::Genres => GENRE_FILTERS,
            Section::Groups => GROUP_FILTERS,
            Section::Members => MEMBER_FILTERS,
            Section::Comments => COMMENT_FILTERS,
            Section::Ads => AD_FILTERS,
            Section::Achievements => ACHIEVEMENT_FILTERS,
            Section::Doujinshi => DOUJINSHI_FILTERS,
            Section::Pets => PET_FILTERS,
            Section::ChapterReports => REPORT_FILTERS,
        }
    }

    pub fn default_filters(self) -> FilterState {
        FilterState::empty(self.filter_fields())
    }

    /// Columns in the order of [`RemoteEntity::cells`] for this section's entity
    pub fn columns(self) -> &'static [Column] {
        match self {
            Section::Manga => MANGA_COLUMNS,
            Section::Chapters => CHAPTERS_COLUMNS,
            Section::Authors => AUTHORS_COLUMNS,
            Section::Genres => GENRES_COLUMNS,
            Section::Groups => GROUPS_COLUMNS,
            Section::Members => MEMBERS_COLUMNS,
            Section::Comments => COMMENTS_COLUMNS,
            Section::Ads => ADS_COLUMNS,
            Section::Achievements => ACHIEVEMENTS_COLUMNS,
            Section::Doujinshi => DOUJINSHI_COLUMNS,
            Section::Pets => PETS_COLUMNS,
            Section::ChapterReports => CHAPTER_REPORTS_COLUMNS,
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Section::Manga | Section::Doujinshi | Section::Pets => Layout::Grid,
            _ => Layout::Table,
        }
    }

    /// Whether the section page carries the report statistics panel
    pub fn has_report_stats(self) -> bool {
        matches!(self, Section::ChapterReports)
    }

    /// Fetch one page of this section and flatten it into rows
    pub async fn fetch_rows(
        self,
        source: &dyn CollectionSource,
        query: &ListingQuery,
    ) -> Result<Page<Row>, ApiError> {
        debug!("Fetching {} with {:?}", self.slug(), query.filters());
        match self {
            Section::Manga => fetch_typed::<Manga>(self, source, query).await,
            Section::Chapters => fetch_typed::<Chapter>(self, source, query).await,
            Section::Authors => fetch_typed::<Author>(self, source, query).await,
            Section::Genres => fetch_typed::<Genre>(self, source, query).await,
            Section::Groups => fetch_typed::<Group>(self, source, query).await,
            Section::Members => fetch_typed::<Member>(self, source, query).await,
            Section::Comments => fetch_typed::<Comment>(self, source, query).await,
            Section::Ads => fetch_typed::<Ad>(self, source, query).await,
            Section::Achievements => fetch_typed::<Achievement>(self, source, query).await,
            Section::Doujinshi => fetch_typed::<Doujinshi>(self, source, query).await,
            Section::Pets => fetch_typed::<Pet>(self, source, query).await,
            Section::ChapterReports => fetch_typed::<ChapterReport>(self, source, query).await,
        }
    }
}

async fn fetch_typed<E: RemoteEntity>(
    section: Section,
    source: &dyn CollectionSource,
    query: &ListingQuery,
) -> Result<Page<Row>, ApiError> {
    let value = source.list(section.endpoint(), query).await?;
    let page: Page<E> = decode_page(value, query)?;
    Ok(page.map(|entity| Row::from_entity(&entity)))
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
