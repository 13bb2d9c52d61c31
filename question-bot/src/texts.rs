//! User-facing texts and the button payload.

pub const ASK_BUTTON_TEXT: &str = "Задать вопрос";

/// Callback payload of the one recognized inline button.
pub const ASK_QUESTION_CALLBACK: &str = "ask_question";

pub const WELCOME: &str = "🌟 Добро пожаловать в \"Психо и точка\"!

Здесь вы можете задать интересующий вас вопрос.

❗️ Обратите внимание:
- Это не экстренная психологическая помощь
- На личные вопросы отвечаю в формате платной консультации
- Наиболее интересные вопросы будут разобраны в постах канала

Нажмите кнопку \"Задать вопрос\" ниже 👇";

pub const HELP: &str = "🔍 Как пользоваться ботом:

1. Нажмите кнопку \"Задать вопрос\"
2. Напишите ваш вопрос в следующем сообщении
3. Дождитесь подтверждения получения

❗️ Важно:
- Бот не предназначен для экстренной помощи
- Для личной консультации обратитесь к специалисту
- Ответы на интересные вопросы публикуются в канале

Для начала работы введите /start";

pub const QUESTION_PROMPT: &str = "📝 Пожалуйста, напишите ваш вопрос в следующем сообщении.\n\n\
Постарайтесь сформулировать его максимально конкретно.";

pub const CONFIRMATION: &str = "✅ Спасибо за ваш вопрос! Он передан психологу.\n\n\
Наиболее интересные вопросы будут разобраны в постах канала.\n\
Для нового вопроса используйте команду /start";

pub const GENERIC_ERROR: &str = "Произошла ошибка. Пожалуйста, попробуйте позже.";

pub const QUESTION_ERROR: &str = "Произошла ошибка при обработке вопроса. \
Пожалуйста, попробуйте позже или используйте команду /start";

/// Shown in the admin message when the sender has no username.
pub const ANONYMOUS_USER: &str = "Анонимный пользователь";

// Admin message layout.
pub const ADMIN_HEADER: &str = "❓ Новый вопрос!";
pub const ADMIN_FROM: &str = "От:";
pub const ADMIN_TIME: &str = "Время:";
pub const ADMIN_QUESTION: &str = "Вопрос:";
