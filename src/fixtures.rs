#[cfg(test)]
pub mod test {
    use serde::Deserialize;

    /// A representative `.env` file covering every line shape the parser handles.
    pub const SAMPLE_ENV: &str = "\
# Archivo de prueba
STRING_VALUE=hola mundo
INT_VALUE=123
NEGATIVE_INT=-45
NOT_A_NUMBER=abc
DOUBLE_VALUE=2.75
BOOL_TRUE=true
BOOL_FALSE=false
BOOL_ONE=1
BOOL_ZERO=0
BOOL_UPPER=TRUE
BOOL_INVALID=quizas
EMPTY_VALUE=
EMPTY_WITH_COMMENT= # sin valor
SINGLE_QUOTED='comillas simples'
DOUBLE_QUOTED=\"comillas dobles\"
EMPTY_SINGLE=''
EMPTY_DOUBLE=\"\"
VALUE_WITH_EQUALS=parte1=parte2=parte3
INLINE_COMMENT=valor con # comentario al final
SPACED_STRING=  valor con espacios

LINE_WITHOUT_SEPARATOR
";

    #[derive(Deserialize, Debug, PartialEq)]
    pub struct AppEnv {
        pub host: String,
        pub port: u16,
        pub debug: bool,
        pub ratio: f64,
        pub database: DbEnv,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    pub struct DbEnv {
        pub url: String,
        pub pool_size: usize,
    }

    pub const APP_ENV: &str = "\
HOST=0.0.0.0
PORT=8080
DEBUG=TRUE
RATIO=0.75
DATABASE__URL=postgres://db
DATABASE__POOL_SIZE=20
";
}
