//! Typed SELECT builder for the restaurant schema
//!
//! Tables and columns are enums, so only columns that exist can be named.
//! Values never reach the SQL text: every literal becomes a `?` placeholder
//! and is bound, in render order, by [`BuiltQuery::apply_bindings`].

use sqlx::Sqlite;
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Restaurants,
    OpenHours,
    MenuItems,
}

impl Table {
    fn as_sql(self) -> &'static str {
        match self {
            Table::Restaurants => "restaurants r",
            Table::OpenHours => "open_hours o",
            Table::MenuItems => "menu_items m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    RestaurantId,
    RestaurantName,
    OpenHoursRestaurantId,
    DayOfWeek,
    StartMinuteOfDay,
    EndMinuteOfDay,
    MenuItemId,
    MenuItemRestaurantId,
}

impl Column {
    fn as_sql(self) -> &'static str {
        match self {
            Column::RestaurantId => "r.id",
            Column::RestaurantName => "r.name",
            Column::OpenHoursRestaurantId => "o.restaurant_id",
            Column::DayOfWeek => "o.day_of_week",
            Column::StartMinuteOfDay => "o.start_minute_of_day",
            Column::EndMinuteOfDay => "o.end_minute_of_day",
            Column::MenuItemId => "m.id",
            Column::MenuItemRestaurantId => "m.restaurant_id",
        }
    }

    pub fn equals(self, rhs: impl Into<Expr>) -> Condition {
        Expr::from(self).equals(rhs)
    }

    pub fn less_than(self, rhs: impl Into<Expr>) -> Condition {
        Expr::from(self).less_than(rhs)
    }

    pub fn greater_than(self, rhs: impl Into<Expr>) -> Condition {
        Expr::from(self).greater_than(rhs)
    }

    pub fn at_least(self, rhs: impl Into<Expr>) -> Condition {
        Expr::from(self).at_least(rhs)
    }
}

/// Bound parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Column(Column),
    Count(Column),
    Value(QueryValue),
}

impl Expr {
    /// `COUNT(column)`, for HAVING clauses
    pub fn count(column: Column) -> Self {
        Expr::Count(column)
    }

    fn compare(self, op: CmpOp, rhs: impl Into<Expr>) -> Condition {
        Condition::Compare {
            left: self,
            op,
            right: rhs.into(),
        }
    }

    pub fn equals(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CmpOp::Eq, rhs)
    }

    pub fn less_than(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CmpOp::Lt, rhs)
    }

    pub fn greater_than(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CmpOp::Gt, rhs)
    }

    pub fn at_least(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CmpOp::Ge, rhs)
    }

    fn render(&self, sql: &mut String, bindings: &mut Vec<QueryValue>) {
        match self {
            Expr::Column(column) => sql.push_str(column.as_sql()),
            Expr::Count(column) => {
                sql.push_str("COUNT(");
                sql.push_str(column.as_sql());
                sql.push(')');
            }
            Expr::Value(value) => {
                sql.push('?');
                bindings.push(value.clone());
            }
        }
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Column(column)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(QueryValue::Integer(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Value(QueryValue::Text(value.to_string()))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Value(QueryValue::Text(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Lt,
    Gt,
    Ge,
}

impl CmpOp {
    fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => " = ",
            CmpOp::Lt => " < ",
            CmpOp::Gt => " > ",
            CmpOp::Ge => " >= ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Compare { left: Expr, op: CmpOp, right: Expr },
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::All(mut parts) => {
                parts.push(other);
                Condition::All(parts)
            }
            first => Condition::All(vec![first, other]),
        }
    }

    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Any(mut parts) => {
                parts.push(other);
                Condition::Any(parts)
            }
            first => Condition::Any(vec![first, other]),
        }
    }

    fn render(&self, sql: &mut String, bindings: &mut Vec<QueryValue>) {
        match self {
            Condition::Compare { left, op, right } => {
                left.render(sql, bindings);
                sql.push_str(op.as_sql());
                right.render(sql, bindings);
            }
            Condition::All(parts) => Self::render_joined(parts, " AND ", sql, bindings),
            Condition::Any(parts) => Self::render_joined(parts, " OR ", sql, bindings),
        }
    }

    fn render_joined(parts: &[Condition], sep: &str, sql: &mut String, bindings: &mut Vec<QueryValue>) {
        sql.push('(');
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                sql.push_str(sep);
            }
            part.render(sql, bindings);
        }
        sql.push(')');
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    Inner,
    Left,
}

/// SELECT builder
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: Table,
    columns: Vec<Column>,
    distinct: bool,
    joins: Vec<(JoinKind, Table, Condition)>,
    filter: Option<Condition>,
    group_by: Vec<Column>,
    having: Option<Condition>,
    order_by: Vec<Column>,
}

impl QueryBuilder {
    pub fn table(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            distinct: false,
            joins: Vec::new(),
            filter: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &[Column]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn inner_join(mut self, table: Table, on: Condition) -> Self {
        self.joins.push((JoinKind::Inner, table, on));
        self
    }

    pub fn left_join(mut self, table: Table, on: Condition) -> Self {
        self.joins.push((JoinKind::Left, table, on));
        self
    }

    /// Add a WHERE condition; repeated calls are ANDed
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn group_by(mut self, columns: &[Column]) -> Self {
        self.group_by.extend_from_slice(columns);
        self
    }

    pub fn having(mut self, condition: Condition) -> Self {
        self.having = Some(condition);
        self
    }

    pub fn order_by(mut self, columns: &[Column]) -> Self {
        self.order_by.extend_from_slice(columns);
        self
    }

    /// Render SQL text and collect bindings in placeholder order
    pub fn build(&self) -> BuiltQuery {
        let mut sql = String::from("SELECT ");
        let mut bindings = Vec::new();

        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&join_columns(&self.columns));
        }

        sql.push_str(" FROM ");
        sql.push_str(self.table.as_sql());

        for (kind, table, on) in &self.joins {
            sql.push_str(match kind {
                JoinKind::Inner => " INNER JOIN ",
                JoinKind::Left => " LEFT JOIN ",
            });
            sql.push_str(table.as_sql());
            sql.push_str(" ON ");
            on.render(&mut sql, &mut bindings);
        }

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            filter.render(&mut sql, &mut bindings);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&join_columns(&self.group_by));
        }

        if let Some(having) = &self.having {
            sql.push_str(" HAVING ");
            having.render(&mut sql, &mut bindings);
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&join_columns(&self.order_by));
        }

        BuiltQuery { sql, bindings }
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.as_sql())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rendered SQL with its bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    sql: String,
    bindings: Vec<QueryValue>,
}

impl BuiltQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bindings(&self) -> &[QueryValue] {
        &self.bindings
    }

    /// Apply bindings to a SQLx `query_as`
    pub fn apply_bindings<'q, O>(
        &self,
        mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Integer(i) => query.bind(*i),
            };
        }
        query
    }
}
