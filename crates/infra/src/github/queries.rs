pub(crate) const LIST_DISCUSSIONS: &str = r#"
    query ListDiscussions($owner: String!, $repo: String!, $first: Int!, $after: String, $orderBy: DiscussionOrder, $categoryId: ID, $answered: Boolean) {
      repository(owner: $owner, name: $repo) {
        discussions(first: $first, after: $after, orderBy: $orderBy, categoryId: $categoryId, answered: $answered) {
          pageInfo { hasNextPage endCursor }
          nodes {
            id
            number
            title
            bodyText
            createdAt
            updatedAt
            author { login url }
            category { name }
            url
            answerChosenAt
            isAnswered
            comments(first: 0) { totalCount }
            labels(first: 10) { nodes { name color } }
          }
        }
      }
    }
"#;

pub(crate) const SEARCH_DISCUSSIONS: &str = r#"
    query SearchDiscussions($query: String!, $first: Int!, $after: String) {
      search(type: DISCUSSION, query: $query, first: $first, after: $after) {
        pageInfo { hasNextPage endCursor }
        nodes {
          ... on Discussion {
            id
            number
            title
            bodyText
            createdAt
            updatedAt
            author { login url }
            category { name }
            repository { nameWithOwner }
            url
            answerChosenAt
            isAnswered
            comments(first: 0) { totalCount }
            labels(first: 10) { nodes { name color } }
          }
        }
      }
    }
"#;

pub(crate) const GET_DISCUSSION: &str = r#"
    query GetDiscussion($owner: String!, $repo: String!, $number: Int!, $includeComments: Boolean!) {
      repository(owner: $owner, name: $repo) {
        discussion(number: $number) {
          id
          number
          title
          body
          bodyText
          bodyHTML
          createdAt
          updatedAt
          publishedAt
          lastEditedAt
          author { login url avatarUrl ... on User { name email } }
          category { name description emoji emojiHTML isAnswerable }
          repository { nameWithOwner url description }
          labels(first: 10) { nodes { name color } }
          url
          resourcePath
          locked
          activeLockReason
          answerChosenAt
          answerChosenBy { login url ... on User { name email } }
          answer {
            id
            body
            bodyText
            createdAt
            author { login url ... on User { name email } }
            isAnswer
          }
          isAnswered
          upvoteCount
          reactionGroups { content users { totalCount } }
          viewerCanDelete
          viewerCanReact
          viewerCanSubscribe
          viewerCanUpdate
          viewerDidAuthor
          viewerSubscription
          authorAssociation
          createdViaEmail
          databaseId
          editor { login url ... on User { name email } }
          includesCreatedEdit
          comments(first: 100) @include(if: $includeComments) {
            totalCount
            pageInfo { hasNextPage endCursor }
            nodes {
              id
              body
              bodyText
              bodyHTML
              createdAt
              updatedAt
              publishedAt
              author { login url avatarUrl ... on User { name email } }
              authorAssociation
              upvoteCount
              isAnswer
              isMinimized
              minimizedReason
              reactionGroups { content users { totalCount } }
              url
              viewerCanMarkAsAnswer
              viewerCanUnmarkAsAnswer
              replies(first: 50) {
                totalCount
                nodes {
                  id
                  body
                  bodyText
                  createdAt
                  updatedAt
                  author { login url avatarUrl ... on User { name email } }
                  authorAssociation
                  isAnswer
                  url
                }
              }
            }
          }
        }
      }
    }
"#;

pub(crate) const GET_REPOSITORY: &str = r#"
    query GetRepository($owner: String!, $repo: String!) {
      repository(owner: $owner, name: $repo) {
        id
        name
        nameWithOwner
        owner { login url }
        url
        description
      }
    }
"#;

pub(crate) const GET_DISCUSSION_CATEGORIES: &str = r#"
    query GetDiscussionCategories($owner: String!, $repo: String!) {
      repository(owner: $owner, name: $repo) {
        discussionCategories(first: 100) {
          nodes {
            id
            name
            description
            emoji
            emojiHTML
            isAnswerable
            createdAt
            updatedAt
          }
        }
      }
    }
"#;
